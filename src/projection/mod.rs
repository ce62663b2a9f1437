//! Projection module
//!
//! Read-side views derived from citizen snapshots on every request.
//! Nothing here is cached or persisted; every function is a pure
//! aggregation over the citizens it is given.

mod citizen;
mod statistics;
mod zone;

pub use citizen::{CitizenSummary, Roster, RosterEntry};
pub use statistics::{RankedCitizen, SystemStatistics, ZoneSummary};
pub use zone::ZoneReport;

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::WasteCategory;

/// One category's weight and its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: WasteCategory,
    pub weight: Decimal,
    /// 0..=100
    pub percentage: Decimal,
}

/// Percentage of the total weight per category.
///
/// Empty when the total weight is zero: there is nothing to divide.
pub fn category_shares(totals: &BTreeMap<WasteCategory, Decimal>) -> Vec<CategoryShare> {
    let total: Decimal = totals.values().copied().sum();
    if total <= Decimal::ZERO {
        return Vec::new();
    }

    totals
        .iter()
        .map(|(category, weight)| CategoryShare {
            category: *category,
            weight: *weight,
            percentage: *weight / total * Decimal::ONE_HUNDRED,
        })
        .collect()
}
