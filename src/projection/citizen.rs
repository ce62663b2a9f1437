//! Citizen views
//!
//! Per-citizen detail and the roster of everyone registered.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::{Aggregate, Citizen};
use crate::domain::{DepositRecord, Points, WasteCategory};

/// Detail view of one citizen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitizenSummary {
    pub citizen_id: String,
    pub name: String,
    pub zone: String,
    pub registered_at: Option<DateTime<Utc>>,
    pub total_points: Points,
    pub deposit_count: usize,
    pub weight_by_category: BTreeMap<WasteCategory, Decimal>,
    /// Newest first
    pub recent_deposits: Vec<DepositRecord>,
}

impl CitizenSummary {
    /// Summarize `citizen`, keeping the latest `recent_limit` deposits.
    /// Deposits sharing a timestamp list the later insertion first.
    pub fn build(citizen: &Citizen, recent_limit: usize) -> Self {
        let mut recent: Vec<&DepositRecord> = citizen.deposits().iter().rev().collect();
        recent.sort_by(|a, b| b.deposited_at().cmp(&a.deposited_at()));

        Self {
            citizen_id: citizen.id().to_string(),
            name: citizen.name().to_string(),
            zone: citizen.zone().to_string(),
            registered_at: citizen.registered_at(),
            total_points: citizen.total_points(),
            deposit_count: citizen.deposit_count(),
            weight_by_category: citizen.weight_by_category(),
            recent_deposits: recent.into_iter().take(recent_limit).cloned().collect(),
        }
    }
}

/// Roster row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub citizen_id: String,
    pub name: String,
    pub zone: String,
    pub deposit_count: usize,
    pub total_points: Points,
}

/// Everyone registered, sorted by zone then name, with grand totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
    pub total_citizens: usize,
    pub total_deposits: usize,
    pub total_points: Points,
}

impl Roster {
    pub fn build(citizens: &[&Citizen]) -> Self {
        let mut entries: Vec<RosterEntry> = citizens
            .iter()
            .map(|citizen| RosterEntry {
                citizen_id: citizen.id().to_string(),
                name: citizen.name().to_string(),
                zone: citizen.zone().to_string(),
                deposit_count: citizen.deposit_count(),
                total_points: citizen.total_points(),
            })
            .collect();
        entries.sort_by(|a, b| a.zone.cmp(&b.zone).then_with(|| a.name.cmp(&b.name)));

        Self {
            total_citizens: entries.len(),
            total_deposits: entries.iter().map(|e| e.deposit_count).sum(),
            total_points: entries.iter().map(|e| e.total_points).sum(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
