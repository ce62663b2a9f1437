//! Command definitions
//!
//! Commands represent intentions to change the system state.

use serde::{Deserialize, Serialize};

use crate::domain::{DepositRecord, Points, ScoringPolicy, WasteItem};

// =========================================================================
// CreateCitizenCommand
// =========================================================================

/// Command to register a new citizen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCitizenCommand {
    pub citizen_id: String,
    pub name: String,
    pub zone: String,
}

impl CreateCitizenCommand {
    pub fn new(
        citizen_id: impl Into<String>,
        name: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            citizen_id: citizen_id.into(),
            name: name.into(),
            zone: zone.into(),
        }
    }
}

// =========================================================================
// RegisterDepositCommand
// =========================================================================

/// Command to score and record a deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDepositCommand {
    pub citizen_id: String,
    pub item: WasteItem,
}

impl RegisterDepositCommand {
    pub fn new(citizen_id: impl Into<String>, item: WasteItem) -> Self {
        Self {
            citizen_id: citizen_id.into(),
            item,
        }
    }
}

/// Result of a successful citizen registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCitizenResult {
    pub citizen_id: String,
    pub name: String,
    pub zone: String,
}

/// Result of a successful deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDepositResult {
    pub citizen_id: String,
    /// The record exactly as stored
    pub record: DepositRecord,
    /// Policy that scored the deposit
    pub policy: ScoringPolicy,
    /// Citizen's total after this deposit
    pub citizen_total: Points,
}

/// Result of a policy switch
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolicyChangeResult {
    pub previous: ScoringPolicy,
    pub current: ScoringPolicy,
}
