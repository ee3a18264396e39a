use crate::errors::AmmError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fee rate in basis points, validated to be at most 100%.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// 100% expressed in basis points.
    pub const MAX: u16 = 10_000;

    /// Validating constructor; anything above 100% is rejected.
    pub fn new(bps: u16) -> Result<Self, AmmError> {
        if bps > Self::MAX {
            return Err(AmmError::InvalidFee);
        }
        Ok(Self(bps))
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// The remaining share after this fee: `MAX - bps`.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self(Self::MAX - self.0)
    }

    /// `floor(amount * bps / 10000)`.
    pub fn apply_floor(&self, amount: u64) -> Result<u64, AmmError> {
        let raw = (amount as u128)
            .checked_mul(self.0 as u128)
            .ok_or(AmmError::Overflow)?
            / Self::MAX as u128;
        u64::try_from(raw).map_err(|_| AmmError::Overflow)
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::MAX)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
