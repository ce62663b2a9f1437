//! Audit Log
//!
//! Tamper-evident, in-memory record of every state change, chained with
//! SHA-256 so that any edited entry breaks verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::OperationContext;

/// Hash preceding the first entry
pub const GENESIS_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub sequence_number: u64,
    pub correlation_id: Option<Uuid>,
    pub operator: Option<String>,
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub after_state: Option<serde_json::Value>,
    pub previous_hash: String,
    pub current_hash: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    fn compute_hash(&self) -> String {
        let hash_input = format!(
            "{}{}{}{}{}{}",
            self.id,
            self.sequence_number,
            self.action,
            self.resource_id.as_deref().unwrap_or_default(),
            self.after_state
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_default(),
            self.previous_hash
        );
        sha256_hex(&hash_input)
    }
}

/// Audit action types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CitizenCreated,
    DepositRegistered,
    PolicyChanged,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CitizenCreated => "citizen.created",
            AuditAction::DepositRegistered => "deposit.registered",
            AuditAction::PolicyChanged => "policy.changed",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builder for creating audit log entries
#[derive(Debug, Clone)]
pub struct AuditLogBuilder {
    action: String,
    resource_type: Option<String>,
    resource_id: Option<String>,
    after_state: Option<serde_json::Value>,
}

impl AuditLogBuilder {
    /// Create a new audit log builder
    pub fn new(action: AuditAction) -> Self {
        Self {
            action: action.as_str().to_string(),
            resource_type: None,
            resource_id: None,
            after_state: None,
        }
    }

    /// Set the resource type
    pub fn resource_type(mut self, resource_type: &str) -> Self {
        self.resource_type = Some(resource_type.to_string());
        self
    }

    /// Set the resource ID
    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Set the after state
    pub fn after_state<T: Serialize>(mut self, state: &T) -> Self {
        self.after_state = serde_json::to_value(state).ok();
        self
    }
}

/// Append-only audit log
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, chaining it to the previous one
    pub fn record(&mut self, builder: AuditLogBuilder, context: &OperationContext) -> Uuid {
        let previous_hash = self
            .entries
            .last()
            .map(|entry| entry.current_hash.clone())
            .unwrap_or_else(|| GENESIS_HASH.to_string());

        let mut entry = AuditLogEntry {
            id: Uuid::new_v4(),
            sequence_number: self.entries.len() as u64 + 1,
            correlation_id: context.correlation_id,
            operator: context.operator.clone(),
            action: builder.action,
            resource_type: builder.resource_type,
            resource_id: builder.resource_id,
            after_state: builder.after_state,
            previous_hash,
            current_hash: String::new(),
            created_at: Utc::now(),
        };
        entry.current_hash = entry.compute_hash();

        tracing::debug!(
            audit_id = %entry.id,
            sequence = entry.sequence_number,
            action = %entry.action,
            "Audit log entry created"
        );

        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<&AuditLogEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Verify the integrity of the hash chain
    pub fn verify_chain(&self) -> ChainVerificationResult {
        verify_entries(&self.entries)
    }
}

/// Recompute the chain over `entries`, stopping at the first broken link
pub fn verify_entries(entries: &[AuditLogEntry]) -> ChainVerificationResult {
    let mut previous_hash = GENESIS_HASH.to_string();

    for entry in entries {
        if entry.previous_hash != previous_hash {
            return ChainVerificationResult {
                is_valid: false,
                entries_checked: entry.sequence_number,
                first_invalid_entry: Some(entry.id),
                expected_hash: Some(previous_hash),
                actual_hash: Some(entry.previous_hash.clone()),
            };
        }

        let calculated_hash = entry.compute_hash();
        if calculated_hash != entry.current_hash {
            return ChainVerificationResult {
                is_valid: false,
                entries_checked: entry.sequence_number,
                first_invalid_entry: Some(entry.id),
                expected_hash: Some(calculated_hash),
                actual_hash: Some(entry.current_hash.clone()),
            };
        }

        previous_hash = entry.current_hash.clone();
    }

    ChainVerificationResult {
        is_valid: true,
        entries_checked: entries.len() as u64,
        first_invalid_entry: None,
        expected_hash: None,
        actual_hash: None,
    }
}

/// Result of hash chain verification
#[derive(Debug, Clone)]
pub struct ChainVerificationResult {
    pub is_valid: bool,
    pub entries_checked: u64,
    pub first_invalid_entry: Option<Uuid>,
    pub expected_hash: Option<String>,
    pub actual_hash: Option<String>,
}

/// Calculate SHA-256 hash and return as hex string
fn sha256_hex(input: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

// =========================================================================
// Tests
// =========================================================================
