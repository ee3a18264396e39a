use crate::errors::AmmError;
use rust_decimal::Decimal;

/// Calculates the output amount for a given input amount in a constant
/// product pool (x * y = k), with the pool fee taken on the input leg.
///
/// formula: dy = y * dx' / (x + dx'), where dx' = dx * (10000 - fee) / 10000
pub fn swap_out_amount(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<u64, AmmError> {
    if fee_bps > 10_000 {
        return Err(AmmError::InvalidFee);
    }
    if amount_in == 0 {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::NoLiquidityInPool);
    }

    let amount_in_after_fee = (amount_in as u128)
        .checked_mul((10_000 - fee_bps) as u128)
        .ok_or(AmmError::Overflow)?
        / 10_000;
    let numerator = (reserve_out as u128)
        .checked_mul(amount_in_after_fee)
        .ok_or(AmmError::Overflow)?;
    let denominator = (reserve_in as u128)
        .checked_add(amount_in_after_fee)
        .ok_or(AmmError::Overflow)?;

    let amount_out = numerator / denominator;

    u64::try_from(amount_out).map_err(|_| AmmError::Overflow)
}

/// The constant product K of a pair of reserves.
pub fn constant_k(reserve_x: u64, reserve_y: u64) -> u128 {
    (reserve_x as u128) * (reserve_y as u128)
}

/// Spot price of the input token in terms of the output token:
/// reserve_out / reserve_in.
pub fn spot_price(reserve_in: u64, reserve_out: u64) -> Result<Decimal, AmmError> {
    if reserve_in == 0 {
        return Err(AmmError::NoLiquidityInPool);
    }
    Ok(Decimal::from(reserve_out) / Decimal::from(reserve_in))
}
