//! Token-2022 transfer-fee arithmetic.
//!
//! Fee-bearing mints withhold `floor(amount * bps / 10000)` capped at a
//! per-transfer maximum. When the pool must guarantee a recipient a net
//! amount (a swap's `min_out`), the vault debit has to be grossed up so
//! the post-fee receipt still meets the bound.

use crate::errors::AmmError;
use serde::{Deserialize, Serialize};

/// Transfer-fee parameters of a fee-bearing mint, as reported by the
/// external extension layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFeeParams {
    pub basis_points: u16,
    /// Per-transfer cap on the withheld fee, in base units.
    pub maximum_fee: u64,
}

impl TransferFeeParams {
    pub fn new(basis_points: u16, maximum_fee: u64) -> Result<Self, AmmError> {
        if basis_points > 10_000 {
            return Err(AmmError::InvalidFee);
        }
        Ok(Self {
            basis_points,
            maximum_fee,
        })
    }

    /// Fee withheld from a transfer of `amount`.
    pub fn fee_amount(&self, amount: u64) -> Result<u64, AmmError> {
        fee_amount(amount, self.basis_points, self.maximum_fee)
    }

    /// Vault debit required for the recipient to net `net`.
    pub fn gross_up(&self, net: u64) -> Result<u64, AmmError> {
        gross_up(net, self.basis_points, self.maximum_fee)
    }
}

/// Fee withheld from a transfer of `amount`: floor(amount * bps / 10000),
/// capped at `max_fee`.
pub fn fee_amount(amount: u64, fee_bps: u16, max_fee: u64) -> Result<u64, AmmError> {
    if fee_bps == 0 {
        return Ok(0);
    }
    let raw = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(AmmError::MathOverflow)?
        / 10_000;
    let raw = u64::try_from(raw).map_err(|_| AmmError::MathOverflow)?;
    Ok(raw.min(max_fee))
}

/// Smallest practical gross amount such that
/// `gross - fee_amount(gross) >= net`.
///
/// Mirrors the token layer's own pre-fee calculation: ceil-divide by the
/// fee complement, fall back to `net + max_fee` once the cap binds.
pub fn gross_up(net: u64, fee_bps: u16, max_fee: u64) -> Result<u64, AmmError> {
    if net == 0 || fee_bps == 0 {
        return Ok(net);
    }
    if fee_bps >= 10_000 {
        return net.checked_add(max_fee).ok_or(AmmError::MathOverflow);
    }

    let numerator = (net as u128)
        .checked_mul(10_000)
        .ok_or(AmmError::MathOverflow)?;
    let denominator = (10_000 - fee_bps) as u128;
    let raw_gross = u64::try_from(numerator.div_ceil(denominator))
        .map_err(|_| AmmError::MathOverflow)?;

    if fee_amount(raw_gross, fee_bps, max_fee)? >= max_fee {
        net.checked_add(max_fee).ok_or(AmmError::MathOverflow)
    } else {
        Ok(raw_gross)
    }
}
