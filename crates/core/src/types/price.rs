//! Integer amounts and the tax rule, using decimal arithmetic for the rate.
//!
//! Catalog prices are whole rupees. Tax is the only fractional step: it is
//! computed exactly with [`Decimal`] and rounded to the nearest whole rupee,
//! ties away from zero, so `35 × 0.05 = 1.75` becomes `2` and `50 × 0.05 = 2.5`
//! becomes `3` on every platform.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Sales tax applied to every subtotal (5%).
pub const TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Currency symbol used when displaying amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// A non-negative whole-rupee amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole rupees.
    #[must_use]
    pub const fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    /// Get the amount in whole rupees.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true for the zero amount.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Tax owed on this amount at [`TAX_RATE`].
    #[must_use]
    pub fn tax(self) -> Self {
        let exact = Decimal::from(self.0) * TAX_RATE;
        // The rounded tax never exceeds the amount itself, so it always fits.
        Self(round_half_away(exact).to_u64().unwrap_or_default())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(rupees: u64) -> Self {
        Self(rupees)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Round to the nearest integer, ties away from zero.
#[must_use]
pub fn round_half_away(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Derived subtotal, tax and total for one configuration.
///
/// Stored records embed these three fields side by side, so the struct
/// flattens cleanly into favorites and order records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub subtotal: Amount,
    pub tax: Amount,
    pub total: Amount,
}

impl Breakdown {
    /// Apply the tax rule to a subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Amount) -> Self {
        let tax = subtotal.tax();
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
