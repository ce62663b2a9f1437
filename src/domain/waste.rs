//! Waste items
//!
//! The closed set of recyclable categories and the immutable records of
//! what a citizen deposited.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, Points, Weight};

/// Recyclable material category.
///
/// Each variant differs only by its points-per-kilogram coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WasteCategory {
    Plastic,
    Paper,
    Glass,
}

impl WasteCategory {
    /// Every category, in menu order
    pub const ALL: [WasteCategory; 3] = [Self::Plastic, Self::Paper, Self::Glass];

    /// Points awarded per kilogram under the standard policy
    pub fn points_per_kg(&self) -> Decimal {
        match self {
            WasteCategory::Plastic => Decimal::new(20, 1),
            WasteCategory::Paper => Decimal::new(15, 1),
            WasteCategory::Glass => Decimal::new(30, 1),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteCategory::Plastic => "Plastic",
            WasteCategory::Paper => "Paper",
            WasteCategory::Glass => "Glass",
        }
    }

    /// One-letter code used by the deposit menu
    pub fn code(&self) -> char {
        match self {
            WasteCategory::Plastic => 'P',
            WasteCategory::Paper => 'A',
            WasteCategory::Glass => 'V',
        }
    }

    /// Resolve a menu code (case-insensitive, surrounding whitespace ignored)
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let trimmed = code.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                let mut chars = trimmed.chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(c), None) if c.to_ascii_uppercase() == category.code()
                )
            })
            .ok_or_else(|| DomainError::UnknownCategory(trimmed.to_string()))
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One deposited item. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteItem {
    category: WasteCategory,
    weight: Weight,
    deposited_at: DateTime<Utc>,
}

impl WasteItem {
    /// Create an item deposited now.
    ///
    /// # Errors
    /// - `DomainError::Measure` if `kilograms` <= 0
    pub fn new(category: WasteCategory, kilograms: Decimal) -> Result<Self, DomainError> {
        Self::at(category, kilograms, Utc::now())
    }

    /// Create an item with an explicit deposit timestamp
    pub fn at(
        category: WasteCategory,
        kilograms: Decimal,
        deposited_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let weight = Weight::new(kilograms)?;
        Ok(Self::from_weight(category, weight, deposited_at))
    }

    /// Create an item from an already validated weight
    pub fn from_weight(category: WasteCategory, weight: Weight, deposited_at: DateTime<Utc>) -> Self {
        Self {
            category,
            weight,
            deposited_at,
        }
    }

    /// weight * points_per_kg(category)
    pub fn raw_points(&self) -> Points {
        Points::for_weight(self.weight, self.category.points_per_kg())
    }

    pub fn category(&self) -> WasteCategory {
        self.category
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn deposited_at(&self) -> DateTime<Utc> {
        self.deposited_at
    }
}

/// A scored deposit. Points are frozen at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRecord {
    item: WasteItem,
    points_awarded: Points,
}

impl DepositRecord {
    pub fn new(item: WasteItem, points_awarded: Points) -> Self {
        Self {
            item,
            points_awarded,
        }
    }

    pub fn item(&self) -> &WasteItem {
        &self.item
    }

    pub fn points_awarded(&self) -> Points {
        self.points_awarded
    }

    pub fn deposited_at(&self) -> DateTime<Utc> {
        self.item.deposited_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MeasureError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_points_per_kg_constants() {
        assert_eq!(WasteCategory::Plastic.points_per_kg(), dec!(2.0));
        assert_eq!(WasteCategory::Paper.points_per_kg(), dec!(1.5));
        assert_eq!(WasteCategory::Glass.points_per_kg(), dec!(3.0));
    }

    #[test]
    fn test_raw_points_is_weight_times_rate() {
        for category in WasteCategory::ALL {
            for kilograms in [dec!(0.1), dec!(1), dec!(2.5), dec!(13.75)] {
                let item = WasteItem::new(category, kilograms).unwrap();
                assert_eq!(
                    item.raw_points().value(),
                    kilograms * category.points_per_kg()
                );
            }
        }
    }

    #[test]
    fn test_item_rejects_non_positive_weight() {
        for kilograms in [dec!(0), dec!(-3.5)] {
            let result = WasteItem::new(WasteCategory::Glass, kilograms);
            assert!(matches!(
                result,
                Err(DomainError::Measure(MeasureError::NotPositive(_)))
            ));
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(WasteCategory::from_code("P").unwrap(), WasteCategory::Plastic);
        assert_eq!(WasteCategory::from_code("a").unwrap(), WasteCategory::Paper);
        assert_eq!(WasteCategory::from_code(" v ").unwrap(), WasteCategory::Glass);
    }

    #[test]
    fn test_from_code_unknown() {
        for code in ["X", "", "PA", "plastic"] {
            assert!(matches!(
                WasteCategory::from_code(code),
                Err(DomainError::UnknownCategory(_))
            ));
        }
    }

    #[test]
    fn test_deposit_record_keeps_points() {
        let item = WasteItem::new(WasteCategory::Plastic, dec!(2)).unwrap();
        let points = Points::new(dec!(4)).unwrap();
        let record = DepositRecord::new(item.clone(), points);

        assert_eq!(record.points_awarded(), points);
        assert_eq!(record.item(), &item);
        assert_eq!(record.deposited_at(), item.deposited_at());
    }
}
