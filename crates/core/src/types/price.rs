//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quantity::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative menu price in the menu's display currency.
///
/// Serialized as a plain JSON number so that menus written by the admin
/// surface (`{"price": 4.5}`) decode without conversion.
///
/// ```
/// use qr_menu_core::{Price, Quantity};
/// use rust_decimal::Decimal;
///
/// let latte = Price::new(Decimal::new(450, 2)).unwrap();
/// assert_eq!(latte.to_string(), "$4.50");
/// assert_eq!(latte.times(Quantity::new(2).unwrap()).to_string(), "$9.00");
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "WirePrice", into = "WirePrice")]
pub struct Price(Decimal);

impl Price {
    /// A zero price, the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity.get())))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        write!(f, "${rounded:.2}")
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| Self(acc.0.saturating_add(p.0)))
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
struct WirePrice(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl TryFrom<WirePrice> for Price {
    type Error = PriceError;

    fn try_from(wire: WirePrice) -> Result<Self, Self::Error> {
        Self::new(wire.0)
    }
}

impl From<Price> for WirePrice {
    fn from(price: Price) -> Self {
        Self(price.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::from_cents(800).to_string(), "$8.00");
        assert_eq!(Price::from_cents(250).to_string(), "$2.50");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_negative_rejected() {
        let err = Price::new(Decimal::new(-250, 2)).unwrap_err();
        assert!(matches!(err, PriceError::Negative(_)));
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("4.5").unwrap();
        assert_eq!(price, Price::from_cents(450));
        let whole: Price = serde_json::from_str("12").unwrap();
        assert_eq!(whole, Price::from_cents(1200));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-3.0").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::from_cents(350)).unwrap();
        assert_eq!(json, "3.5");
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Price = core::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_times_quantity() {
        let q = Quantity::new(3).unwrap();
        assert_eq!(Price::from_cents(800).times(q), Price::from_cents(2400));
    }
}
