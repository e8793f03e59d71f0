//! Positive line quantities.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A positive item count.
///
/// A cart line can never hold zero units, so the type cannot either. Callers
/// that accept arbitrary signed input go through [`Quantity::from_signed`],
/// which maps `<= 0` to `None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] for `0`.
    pub const fn new(n: u32) -> Result<Self, QuantityError> {
        match NonZeroU32::new(n) {
            Some(n) => Ok(Self(n)),
            None => Err(QuantityError::Zero),
        }
    }

    /// Interpret a signed count, clamping values above `u32::MAX`.
    ///
    /// ```
    /// use qr_menu_core::Quantity;
    ///
    /// assert_eq!(Quantity::from_signed(0), None);
    /// assert_eq!(Quantity::from_signed(-4), None);
    /// assert_eq!(Quantity::from_signed(3).map(Quantity::get), Some(3));
    /// ```
    #[must_use]
    pub fn from_signed(n: i64) -> Option<Self> {
        if n <= 0 {
            return None;
        }
        let clamped = u32::try_from(n).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped).map(Self)
    }

    /// The count as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// One more unit.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, never dropping below one.
    #[must_use]
    pub fn decrement(self) -> Self {
        NonZeroU32::new(self.0.get() - 1).map_or(self, Self)
    }

    /// Combined quantity of two lines for the same item.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.get()
    }
}
