//! Scoring policies
//!
//! The swappable rule that turns a deposited item into loyalty points.
//! Policies are pure: the same item always scores the same under the same
//! policy, and switching policy never touches points already recorded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, Points, WasteItem};

/// Point calculation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Raw category points
    #[default]
    Standard,
    /// Raw category points x1.5
    Promotional,
}

impl ScoringPolicy {
    /// Every policy, in menu order
    pub const ALL: [ScoringPolicy; 2] = [Self::Standard, Self::Promotional];

    /// Points for `item` under this policy
    pub fn compute(&self, item: &WasteItem) -> Points {
        item.raw_points().scaled(self.multiplier())
    }

    /// Factor applied on top of the item's raw points
    pub fn multiplier(&self) -> Decimal {
        match self {
            ScoringPolicy::Standard => Decimal::ONE,
            ScoringPolicy::Promotional => Decimal::new(15, 1),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ScoringPolicy::Standard => "Standard strategy",
            ScoringPolicy::Promotional => "Promotional strategy (x1.5)",
        }
    }

    /// Stable identifier, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPolicy::Standard => "standard",
            ScoringPolicy::Promotional => "promotional",
        }
    }

    /// Resolve the policy menu choice (`1` standard, `2` promotional)
    pub fn from_menu_option(option: &str) -> Result<Self, DomainError> {
        match option.trim() {
            "1" => Ok(ScoringPolicy::Standard),
            "2" => Ok(ScoringPolicy::Promotional),
            other => Err(DomainError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoringPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownPolicy(wanted.to_string()))
    }
}
