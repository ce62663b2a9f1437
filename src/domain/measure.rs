//! Measure types
//!
//! Domain primitives for deposited weight and awarded points.
//! Both are validated at construction time, so an invalid weight or a
//! negative point value cannot exist in the system.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Largest weight accepted for a single deposit, in kilograms
pub const MAX_WEIGHT_KG: Decimal = dec!(1000000);

/// Finest weight resolution accepted (grams)
pub const MAX_WEIGHT_SCALE: u32 = 3;

/// Weight of a deposited item, in kilograms.
///
/// # Invariants
/// - Value is always positive (> 0)
/// - Value is at most `MAX_WEIGHT_KG`
/// - At most `MAX_WEIGHT_SCALE` decimal places
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use recycle_rewards::domain::Weight;
///
/// let weight = Weight::new(Decimal::new(25, 1)).unwrap();
/// assert_eq!(weight.value(), Decimal::new(25, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Weight(Decimal);

/// Errors that can occur when creating a measure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    #[error("Weight must be greater than zero (got {0})")]
    NotPositive(Decimal),

    #[error("Weight exceeds the maximum of {MAX_WEIGHT_KG} kg (got {0})")]
    TooLarge(Decimal),

    #[error("Weight has too many decimal places (max {MAX_WEIGHT_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("Points cannot be negative (got {0})")]
    Negative(Decimal),

    #[error("Invalid number: {0}. Use a decimal with a dot (e.g. 2.5)")]
    ParseError(String),
}

impl Weight {
    /// Create a new Weight with validation.
    ///
    /// # Errors
    /// - `MeasureError::NotPositive` if value <= 0
    /// - `MeasureError::TooLarge` if value > `MAX_WEIGHT_KG`
    /// - `MeasureError::TooManyDecimals` if finer than grams
    pub fn new(value: Decimal) -> Result<Self, MeasureError> {
        if value <= Decimal::ZERO {
            return Err(MeasureError::NotPositive(value));
        }

        if value > MAX_WEIGHT_KG {
            return Err(MeasureError::TooLarge(value));
        }

        let value = value.normalize();
        if value.scale() > MAX_WEIGHT_SCALE {
            return Err(MeasureError::TooManyDecimals(value.scale()));
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value (kilograms).
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg", self.0.round_dp(2))
    }
}

impl FromStr for Weight {
    type Err = MeasureError;

    /// Parses a plain decimal with `.` as the fractional separator.
    /// Thousands separators, commas and exponents are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed.chars().filter(|c| *c == '.').count() <= 1
            && trimmed
                .trim_start_matches(['-', '+'])
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.')
            && trimmed.chars().any(|c| c.is_ascii_digit());

        if !well_formed {
            return Err(MeasureError::ParseError(trimmed.to_string()));
        }

        let decimal = Decimal::from_str(trimmed)
            .map_err(|_| MeasureError::ParseError(trimmed.to_string()))?;
        Weight::new(decimal)
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = MeasureError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl From<Weight> for Decimal {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

/// Loyalty points awarded for deposits (can be zero, never negative).
///
/// Arithmetic saturates at `Decimal::MAX` instead of panicking. With
/// weights capped at `MAX_WEIGHT_KG` a single deposit is worth at most a
/// few million points, so totals only saturate after astronomically many
/// deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Points(Decimal);

impl Points {
    /// Create a new points value (zero or positive)
    pub fn new(value: Decimal) -> Result<Self, MeasureError> {
        if value < Decimal::ZERO {
            return Err(MeasureError::Negative(value));
        }

        Ok(Self(value.normalize()))
    }

    /// Zero points
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Points earned for `weight` at `rate` points per kilogram.
    /// Negative rates clamp to zero.
    pub fn for_weight(weight: Weight, rate: Decimal) -> Self {
        Self(weight.value().saturating_mul(rate.max(Decimal::ZERO)).normalize())
    }

    /// Scale by a non-negative multiplier (negative factors clamp to zero)
    pub fn scaled(self, factor: Decimal) -> Self {
        Self(self.0.saturating_mul(factor.max(Decimal::ZERO)).normalize())
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0).normalize())
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl TryFrom<Decimal> for Points {
    type Error = MeasureError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Points::new(value)
    }
}

impl From<Points> for Decimal {
    fn from(points: Points) -> Self {
        points.0
    }
}
