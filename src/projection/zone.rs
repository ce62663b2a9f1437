//! Zone report
//!
//! Aggregates the citizens of one zone into per-category weights and a
//! point total.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::Citizen;
use crate::domain::{Points, WasteCategory};

use super::{category_shares, CategoryShare};

/// Snapshot of one zone's recycling activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneReport {
    /// Zone as requested by the caller
    pub zone: String,
    pub citizen_count: usize,
    /// Weight per category; categories without deposits are absent
    pub totals_by_category: BTreeMap<WasteCategory, Decimal>,
    pub total_points: Points,
}

impl ZoneReport {
    /// Build the report from citizens already filtered to `zone`.
    ///
    /// An empty slice yields an empty report; rejecting unknown zones is the
    /// caller's decision.
    pub fn build(zone: impl Into<String>, citizens: &[&Citizen]) -> Self {
        let mut totals_by_category = BTreeMap::new();
        let mut total_points = Points::zero();

        for citizen in citizens {
            total_points = total_points + citizen.total_points();

            for deposit in citizen.deposits() {
                let item = deposit.item();
                *totals_by_category
                    .entry(item.category())
                    .or_insert(Decimal::ZERO) += item.weight().value();
            }
        }

        Self {
            zone: zone.into(),
            citizen_count: citizens.len(),
            totals_by_category,
            total_points,
        }
    }

    /// Sum of all deposited weight in the zone
    pub fn total_weight(&self) -> Decimal {
        self.totals_by_category.values().copied().sum()
    }

    /// Share of the zone's weight per category (empty when nothing deposited)
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        category_shares(&self.totals_by_category)
    }

    pub fn has_deposits(&self) -> bool {
        !self.totals_by_category.is_empty()
    }
}
