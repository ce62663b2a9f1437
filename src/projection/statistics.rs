//! System-wide statistics
//!
//! Same aggregation as the zone report, unscoped, plus per-zone summaries,
//! a points leaderboard and the category breakdown.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::{Aggregate, Citizen};
use crate::domain::{Points, WasteCategory};

use super::{category_shares, CategoryShare};

/// Activity of one zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub zone: String,
    pub citizen_count: usize,
    pub deposit_count: usize,
    pub total_points: Points,
}

/// Leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCitizen {
    /// 1-based
    pub rank: usize,
    pub citizen_id: String,
    pub name: String,
    pub zone: String,
    pub total_points: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatistics {
    pub total_citizens: usize,
    pub total_deposits: usize,
    pub total_points: Points,
    /// `None` when nothing has been deposited yet
    pub average_deposits_per_citizen: Option<Decimal>,
    /// `None` when nothing has been deposited yet
    pub average_points_per_citizen: Option<Decimal>,
    /// Sorted by zone name
    pub zones: Vec<ZoneSummary>,
    /// Descending by points; ties keep store order
    pub top_citizens: Vec<RankedCitizen>,
    /// Descending by weight
    pub weight_by_category: Vec<CategoryShare>,
    pub total_weight: Decimal,
}

impl SystemStatistics {
    /// Aggregate over `citizens`, given in store order.
    pub fn build(citizens: &[&Citizen], top_limit: usize) -> Self {
        let total_citizens = citizens.len();
        let total_deposits: usize = citizens.iter().map(|c| c.deposit_count()).sum();
        let total_points: Points = citizens.iter().map(|c| c.total_points()).sum();

        let (average_deposits_per_citizen, average_points_per_citizen) =
            if total_deposits > 0 && total_citizens > 0 {
                let count = Decimal::from(total_citizens);
                (
                    Some(Decimal::from(total_deposits) / count),
                    Some(total_points.value() / count),
                )
            } else {
                (None, None)
            };

        let mut totals: BTreeMap<WasteCategory, Decimal> = BTreeMap::new();
        for citizen in citizens {
            for (category, weight) in citizen.weight_by_category() {
                *totals.entry(category).or_insert(Decimal::ZERO) += weight;
            }
        }
        let total_weight = totals.values().copied().sum();

        let mut weight_by_category = category_shares(&totals);
        weight_by_category.sort_by(|a, b| b.weight.cmp(&a.weight));

        Self {
            total_citizens,
            total_deposits,
            total_points,
            average_deposits_per_citizen,
            average_points_per_citizen,
            zones: summarize_zones(citizens),
            top_citizens: rank_citizens(citizens, top_limit),
            weight_by_category,
            total_weight,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_citizens == 0
    }
}

/// Group by zone (case-insensitive), sorted by zone name.
/// The group is labelled with the first spelling seen.
fn summarize_zones(citizens: &[&Citizen]) -> Vec<ZoneSummary> {
    let mut groups: BTreeMap<String, ZoneSummary> = BTreeMap::new();

    for citizen in citizens {
        let summary = groups
            .entry(citizen.zone().to_lowercase())
            .or_insert_with(|| ZoneSummary {
                zone: citizen.zone().to_string(),
                citizen_count: 0,
                deposit_count: 0,
                total_points: Points::zero(),
            });
        summary.citizen_count += 1;
        summary.deposit_count += citizen.deposit_count();
        summary.total_points = summary.total_points + citizen.total_points();
    }

    groups.into_values().collect()
}

/// Top `limit` citizens by total points. The sort is stable, so equal
/// totals keep the order the citizens were given in.
fn rank_citizens(citizens: &[&Citizen], limit: usize) -> Vec<RankedCitizen> {
    let mut ranked: Vec<(&Citizen, Points)> =
        citizens.iter().map(|c| (*c, c.total_points())).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, (citizen, total_points))| RankedCitizen {
            rank: position + 1,
            citizen_id: citizen.id().to_string(),
            name: citizen.name().to_string(),
            zone: citizen.zone().to_string(),
            total_points,
        })
        .collect()
}
