//! Fixed-point monetary type for auction prices.
//!
//! All monetary values (base prices, bid increments, cumulative totals)
//! use fixed-point arithmetic with 4 decimal places to avoid
//! floating-point precision issues when summing bid increments.

use crate::ids::MONEY_SCALE;
use derive_more::{Add, AddAssign, From, Into, Neg, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point money with 4 decimal places.
///
/// # Examples
/// - `Money(10000)` = 1.00
/// - `Money(15000)` = 1.50
/// - `Money(1)` = 0.0001
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create Money from a floating-point value.
    #[inline]
    pub fn from_float(v: f64) -> Self {
        Self((v * MONEY_SCALE as f64).round() as i64)
    }

    /// Convert to floating-point for display and wire payloads.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / MONEY_SCALE as f64
    }

    /// Raw internal value.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Check if the amount is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({:.4})", self.to_float())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_float())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_float_round_trip() {
        let m = Money::from_float(1234.5);
        assert_eq!(m.raw(), 12_345_000);
        assert_eq!(m.to_float(), 1234.5);
    }

    #[test]
    fn test_sum_of_increments() {
        let total: Money = [200.0, 150.0, 50.0]
            .iter()
            .map(|v| Money::from_float(*v))
            .sum();
        assert_eq!(total, Money::from_float(400.0));
    }

    #[test]
    fn test_positivity() {
        assert!(Money::from_float(0.0001).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::from_float(-5.0).is_positive());
    }
}
