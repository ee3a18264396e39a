use crate::errors::AmmError;

/// LP shares minted for the very first deposit: floor(sqrt(x * y)).
pub fn initial_lp_amount(amount_x: u64, amount_y: u64) -> Result<u64, AmmError> {
    if amount_x == 0 || amount_y == 0 {
        return Err(AmmError::InvalidAmount);
    }
    let k = (amount_x as u128)
        .checked_mul(amount_y as u128)
        .ok_or(AmmError::Overflow)?;
    u64::try_from(k.isqrt()).map_err(|_| AmmError::Overflow)
}

/// Token amounts required to mint `lp_requested` shares at the current
/// reserve ratio. Rounds up on both legs so the pool never under-collects.
pub fn deposit_amounts(
    lp_requested: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64), AmmError> {
    if lp_requested == 0 {
        return Err(AmmError::InvalidAmount);
    }
    if lp_supply == 0 {
        return Err(AmmError::NoLiquidityInPool);
    }
    let amount_x = ceil_ratio(lp_requested, reserve_x, lp_supply)?;
    let amount_y = ceil_ratio(lp_requested, reserve_y, lp_supply)?;
    Ok((amount_x, amount_y))
}

/// Token amounts returned for burning `lp_amount` shares. Rounds down on
/// both legs so the pool never over-pays.
pub fn withdraw_amounts(
    lp_amount: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64), AmmError> {
    if lp_amount == 0 {
        return Err(AmmError::InvalidAmount);
    }
    if lp_supply == 0 {
        return Err(AmmError::NoLiquidityInPool);
    }
    if lp_amount > lp_supply {
        return Err(AmmError::InsufficientFunds);
    }
    let amount_x = floor_ratio(lp_amount, reserve_x, lp_supply)?;
    let amount_y = floor_ratio(lp_amount, reserve_y, lp_supply)?;
    Ok((amount_x, amount_y))
}

fn ceil_ratio(shares: u64, reserve: u64, supply: u64) -> Result<u64, AmmError> {
    let numerator = (shares as u128)
        .checked_mul(reserve as u128)
        .ok_or(AmmError::Overflow)?;
    let amount = numerator.div_ceil(supply as u128);
    u64::try_from(amount).map_err(|_| AmmError::Overflow)
}

fn floor_ratio(shares: u64, reserve: u64, supply: u64) -> Result<u64, AmmError> {
    let numerator = (shares as u128)
        .checked_mul(reserve as u128)
        .ok_or(AmmError::Overflow)?;
    u64::try_from(numerator / supply as u128).map_err(|_| AmmError::Overflow)
}
