//! # Money Module
//!
//! Provides the `Money` type every price, tax amount and total flows through.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With doubles, summing a long invoice drifts:                          │
//! │    0.1 + 0.2 = 0.30000000000000004                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices are stored in cents, tax is rounded to the cent once per     │
//! │    item, and every sum after that is exact.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use factura_core::money::Money;
//!
//! let bread = Money::from_units(5000);
//! let milk = Money::from_cents(350_000);
//!
//! assert_eq!((bread + milk).cents(), 850_000);
//! assert_eq!(format!("{}", bread), "$5000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that parsing can represent a negative amount long enough for
/// item validation to reject it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use factura_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the tax owed on this amount, rounded half up to the cent.
    ///
    /// ## Implementation
    /// Integer math in `i128`: `(cents * bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use factura_core::money::Money;
    /// use factura_core::types::TaxRate;
    ///
    /// let shirt = Money::from_units(25000);
    /// let tax = shirt.calculate_tax(TaxRate::from_bps(1900)); // 19%
    /// assert_eq!(tax, Money::from_units(4750));
    ///
    /// // 0.10 at 5% = 0.005 → 0.01
    /// assert_eq!(Money::from_cents(10).calculate_tax(TaxRate::from_bps(500)).cents(), 1);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        let tax_cents = tax_cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        Money::from_cents(tax_cents)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

// Addition saturates at the i64 bounds instead of wrapping. Item prices are
// capped at `MAX_PRICE_CENTS`, so a saturated total needs tens of thousands of
// maximum-price items.

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}${}.{:02}", sign, self.units().abs(), self.cents_part());
        // `pad` so receipt columns can use `{:>14}`
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(1500000);
        assert_eq!(money.cents(), 150_000_000);
        assert_eq!(money.units(), 1500000);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_units(1913675)), "$1913675.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(250)), "   $2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let mut c = a;
        c += b;
        c += Money::from_cents(200);
        assert_eq!(c.cents(), 1700);
    }

    #[test]
    fn test_addition_saturates_at_bounds() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(5)).cents(), i64::MAX);

        let mut acc = big;
        acc += big;
        assert_eq!(acc.cents(), i64::MAX);

        let total: Money = [big, big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_tax_on_huge_amount_saturates() {
        let tax = Money::from_cents(i64::MAX).calculate_tax(TaxRate::from_bps(u32::MAX));
        assert_eq!(tax.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_units(5000), Money::from_units(3500)];
        let owned: Money = prices.iter().copied().sum();
        let borrowed: Money = prices.iter().sum();
        assert_eq!(owned, Money::from_units(8500));
        assert_eq!(owned, borrowed);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_calculation_standard_rates() {
        let laptop = Money::from_units(1500000);
        assert_eq!(
            laptop.calculate_tax(TaxRate::from_bps(2500)),
            Money::from_units(375000)
        );

        let milk = Money::from_units(3500);
        assert_eq!(
            milk.calculate_tax(TaxRate::from_bps(500)),
            Money::from_units(175)
        );
    }

    #[test]
    fn test_tax_calculation_rounds_half_up() {
        // 0.30 at 5% = 0.015 → 0.02
        assert_eq!(
            Money::from_cents(30).calculate_tax(TaxRate::from_bps(500)).cents(),
            2
        );
        // 0.21 at 19% = 0.0399 → 0.04
        assert_eq!(
            Money::from_cents(21).calculate_tax(TaxRate::from_bps(1900)).cents(),
            4
        );
    }

    #[test]
    fn test_tax_on_zero_is_zero() {
        assert!(Money::zero()
            .calculate_tax(TaxRate::from_bps(2500))
            .is_zero());
    }
}
