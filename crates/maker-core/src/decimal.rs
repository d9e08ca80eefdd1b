//! Precision-safe decimal types for prices and sizes.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, avoiding
//! floating-point rounding errors in quote calculations. The orderbook API
//! rejects values with excess precision, so both types carry the API's
//! decimal-place caps and can validate/normalize against them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::CoreError;

/// Maximum decimal places the API accepts for a price.
pub const MAX_PRICE_DECIMALS: u32 = 8;

/// Maximum decimal places the API accepts for a size.
pub const MAX_SIZE_DECIMALS: u32 = 4;

/// Price with exact decimal precision.
///
/// Wraps `Decimal` to provide type safety and prevent mixing
/// prices with sizes in calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Round to the API's maximum price precision.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self(self.0.round_dp(MAX_PRICE_DECIMALS).normalize())
    }

    /// Validate against the API's order constraints: positive, at most
    /// [`MAX_PRICE_DECIMALS`] decimal places.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.is_positive() {
            return Err(CoreError::InvalidPrice(format!(
                "price must be positive, got {}",
                self.0
            )));
        }
        if self.0.scale() > MAX_PRICE_DECIMALS {
            return Err(CoreError::InvalidPrice(format!(
                "price must not exceed {MAX_PRICE_DECIMALS} decimal places, got {}",
                self.0
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Price {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Size/quantity with exact decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(pub Decimal);

impl Size {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Round to the API's maximum size precision.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self(self.0.round_dp(MAX_SIZE_DECIMALS).normalize())
    }

    /// Validate against the API's order constraints: positive, at most
    /// [`MAX_SIZE_DECIMALS`] decimal places.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.is_positive() {
            return Err(CoreError::InvalidSize(format!(
                "size must be positive, got {}",
                self.0
            )));
        }
        if self.0.scale() > MAX_SIZE_DECIMALS {
            return Err(CoreError::InvalidSize(format!(
                "size must not exceed {MAX_SIZE_DECIMALS} decimal places, got {}",
                self.0
            )));
        }
        Ok(())
    }

    /// Notional value: size * price.
    #[inline]
    pub fn notional(&self, price: Price) -> Decimal {
        self.0 * price.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Size {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Size {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Size {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_normalize_caps_precision() {
        let price = Price::new(dec!(0.123456789012));
        assert_eq!(price.normalize().inner(), dec!(0.12345679));
    }

    #[test]
    fn test_price_validate_rejects_excess_precision() {
        let price = Price::new(dec!(0.123456789));
        assert!(price.validate().is_err());
        assert!(price.normalize().validate().is_ok());
    }

    #[test]
    fn test_price_validate_rejects_non_positive() {
        assert!(Price::ZERO.validate().is_err());
        assert!(Price::new(dec!(-1)).validate().is_err());
        assert!(Price::new(dec!(0.865)).validate().is_ok());
    }

    #[test]
    fn test_size_validate_rejects_excess_precision() {
        let size = Size::new(dec!(1.23456));
        assert!(size.validate().is_err());
        assert_eq!(size.normalize().inner(), dec!(1.2346));
    }

    #[test]
    fn test_notional_calculation() {
        let size = Size::new(dec!(40));
        let price = Price::new(dec!(0.865));

        assert_eq!(size.notional(price), dec!(34.6));
    }

    #[test]
    fn test_price_serde_round_trip() {
        let price = Price::new(dec!(0.865));
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"0.865\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
