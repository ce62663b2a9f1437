//! Domain Events
//!
//! Immutable facts about citizens. The citizen aggregate folds these to
//! derive its state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DepositRecord, ScoringPolicy};

/// Citizen-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CitizenEvent {
    /// Citizen joined the programme
    CitizenRegistered {
        citizen_id: String,
        name: String,
        zone: String,
        registered_at: DateTime<Utc>,
    },

    /// A deposit was scored and recorded
    DepositRecorded {
        citizen_id: String,
        record: DepositRecord,
        /// Policy that was active when the points were computed
        policy: ScoringPolicy,
    },
}

impl CitizenEvent {
    /// Event name, as logged
    pub fn event_type(&self) -> &'static str {
        match self {
            CitizenEvent::CitizenRegistered { .. } => "CitizenRegistered",
            CitizenEvent::DepositRecorded { .. } => "DepositRecorded",
        }
    }

    /// Get the citizen ID this event relates to
    pub fn citizen_id(&self) -> &str {
        match self {
            CitizenEvent::CitizenRegistered { citizen_id, .. } => citizen_id,
            CitizenEvent::DepositRecorded { citizen_id, .. } => citizen_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Points, WasteCategory, WasteItem};
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_type_and_id() {
        let event = CitizenEvent::CitizenRegistered {
            citizen_id: "12345678".to_string(),
            name: "Ana".to_string(),
            zone: "Norte".to_string(),
            registered_at: Utc::now(),
        };
        assert_eq!(event.event_type(), "CitizenRegistered");
        assert_eq!(event.citizen_id(), "12345678");
    }

    #[test]
    fn test_deposit_event_serializes_with_tag() {
        let item = WasteItem::new(WasteCategory::Glass, dec!(1)).unwrap();
        let event = CitizenEvent::DepositRecorded {
            citizen_id: "c-1".to_string(),
            record: DepositRecord::new(item, Points::new(dec!(3)).unwrap()),
            policy: ScoringPolicy::Standard,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "DepositRecorded");
        assert_eq!(json["policy"], "standard");
        assert_eq!(json["record"]["item"]["category"], "Glass");
    }
}
