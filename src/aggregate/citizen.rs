//! Citizen Aggregate
//!
//! A registered participant and the ordered history of their deposits.
//! Deposits are only ever appended; points recorded on a deposit are never
//! recomputed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{CitizenEvent, DepositRecord, DomainError, Points, ScoringPolicy, WasteCategory};

use super::Aggregate;

/// Citizen Aggregate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Citizen {
    /// Unique citizen ID (national ID number in practice)
    id: String,

    /// Full name
    name: String,

    /// Free-text zone label, compared case-insensitively
    zone: String,

    /// Deposits in insertion order
    deposits: Vec<DepositRecord>,

    /// Current version (number of events applied)
    version: i64,

    /// When the citizen was registered
    registered_at: Option<DateTime<Utc>>,
}

impl Citizen {
    // =========================================================================
    // Citizen::register()
    // =========================================================================

    /// Register a new citizen and generate the registration event.
    /// Surrounding whitespace is stripped from every field.
    pub fn register(
        id: impl Into<String>,
        name: impl Into<String>,
        zone: impl Into<String>,
    ) -> Result<(Self, CitizenEvent), DomainError> {
        let trimmed = |value: String| value.trim().to_string();
        let (id, name, zone) = (trimmed(id.into()), trimmed(name.into()), trimmed(zone.into()));

        DomainError::require("ID", &id)?;
        DomainError::require("Name", &name)?;
        DomainError::require("Zone", &zone)?;

        let now = Utc::now();

        let event = CitizenEvent::CitizenRegistered {
            citizen_id: id.clone(),
            name: name.clone(),
            zone: zone.clone(),
            registered_at: now,
        };

        let citizen = Self {
            id,
            name,
            zone,
            deposits: Vec::new(),
            version: 1,
            registered_at: Some(now),
        };

        Ok((citizen, event))
    }

    // =========================================================================
    // Citizen::record_deposit()
    // =========================================================================

    /// Record a deposit scored by the caller's active policy.
    /// Returns the event to be applied.
    pub fn record_deposit(&self, record: DepositRecord, policy: ScoringPolicy) -> CitizenEvent {
        CitizenEvent::DepositRecorded {
            citizen_id: self.id.clone(),
            record,
            policy,
        }
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Sum of all points awarded
    pub fn total_points(&self) -> Points {
        self.deposits.iter().map(DepositRecord::points_awarded).sum()
    }

    /// Total deposited weight per category (only categories with deposits)
    pub fn weight_by_category(&self) -> BTreeMap<WasteCategory, Decimal> {
        let mut totals = BTreeMap::new();
        for deposit in &self.deposits {
            let item = deposit.item();
            *totals.entry(item.category()).or_insert(Decimal::ZERO) += item.weight().value();
        }
        totals
    }

    /// Case-insensitive zone match, ignoring surrounding whitespace
    pub fn in_zone(&self, zone: &str) -> bool {
        self.zone.trim().to_lowercase() == zone.trim().to_lowercase()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Read-only view of the deposit history
    pub fn deposits(&self) -> &[DepositRecord] {
        &self.deposits
    }

    pub fn deposit_count(&self) -> usize {
        self.deposits.len()
    }

    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        self.registered_at
    }
}

impl Aggregate for Citizen {
    type Event = CitizenEvent;

    fn aggregate_type() -> &'static str {
        "Citizen"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(mut self, event: Self::Event) -> Self {
        match event {
            CitizenEvent::CitizenRegistered {
                citizen_id,
                name,
                zone,
                registered_at,
            } => {
                self.id = citizen_id;
                self.name = name;
                self.zone = zone;
                self.deposits.clear();
                self.registered_at = Some(registered_at);
            }

            CitizenEvent::DepositRecorded { record, .. } => {
                self.deposits.push(record);
            }
        }

        self.version += 1;
        self
    }
}
