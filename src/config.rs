//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

use crate::domain::ScoringPolicy;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Policy active at start-up
    pub scoring_policy: ScoringPolicy,

    /// Load the demo citizens and deposits at start-up
    pub seed_demo_data: bool,

    /// Number of latest deposits shown by the citizen lookup
    pub recent_deposits_limit: usize,

    /// Leaderboard size in the statistics view
    pub top_citizens_limit: usize,

    /// Number of latest entries shown by the audit trail view
    pub audit_entries_limit: usize,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring_policy: ScoringPolicy::Standard,
            seed_demo_data: true,
            recent_deposits_limit: 5,
            top_citizens_limit: 3,
            audit_entries_limit: 10,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let scoring_policy = match lookup("SCORING_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SCORING_POLICY"))?,
            None => defaults.scoring_policy,
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue("SEED_DEMO_DATA"))?,
            None => defaults.seed_demo_data,
        };

        let recent_deposits_limit = lookup("RECENT_DEPOSITS_LIMIT")
            .unwrap_or_else(|| defaults.recent_deposits_limit.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECENT_DEPOSITS_LIMIT"))?;

        let top_citizens_limit = lookup("TOP_CITIZENS_LIMIT")
            .unwrap_or_else(|| defaults.top_citizens_limit.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TOP_CITIZENS_LIMIT"))?;

        let audit_entries_limit = lookup("AUDIT_ENTRIES_LIMIT")
            .unwrap_or_else(|| defaults.audit_entries_limit.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("AUDIT_ENTRIES_LIMIT"))?;

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT")),
        };

        Ok(Self {
            scoring_policy,
            seed_demo_data,
            recent_deposits_limit,
            top_citizens_limit,
            audit_entries_limit,
            log_format,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
