//! Removing liquidity.

use crate::config::PoolConfig;
use crate::effects::LedgerEffect;
use crate::events::PoolEvent;
use hookswap_domain::enums::PoolSide;
use hookswap_domain::errors::AmmError;
use hookswap_domain::math::liquidity;
use tracing::info;

/// Result of a successful withdrawal.
#[derive(Debug, Clone)]
pub struct WithdrawOutcome {
    pub lp_burned: u64,
    pub amount_x: u64,
    pub amount_y: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,
    pub effects: Vec<LedgerEffect>,
    pub event: PoolEvent,
}

/// Burns `lp_amount` shares and pays out the pro-rata share of both
/// reserves, rounding down. Rejects the withdrawal when either leg comes
/// out below the caller's minimum.
pub fn withdraw(
    config: &mut PoolConfig,
    lp_amount: u64,
    min_x: u64,
    min_y: u64,
) -> Result<WithdrawOutcome, AmmError> {
    config.require_unlocked()?;

    let (amount_x, amount_y) = liquidity::withdraw_amounts(
        lp_amount,
        config.reserve_x,
        config.reserve_y,
        config.lp_supply,
    )?;
    if amount_x < min_x || amount_y < min_y {
        return Err(AmmError::LiquidityLessThanMinimum);
    }

    let mut staged = config.clone();
    staged.burn_lp(lp_amount)?;
    staged.debit(PoolSide::X, amount_x)?;
    staged.debit(PoolSide::Y, amount_y)?;
    *config = staged;

    info!(
        seed = config.seed,
        amount_x,
        amount_y,
        lp_burned = lp_amount,
        lp_supply = config.lp_supply,
        "Liquidity withdrawn"
    );

    Ok(WithdrawOutcome {
        lp_burned: lp_amount,
        amount_x,
        amount_y,
        reserve_x: config.reserve_x,
        reserve_y: config.reserve_y,
        lp_supply: config.lp_supply,
        effects: vec![
            LedgerEffect::BurnLp { amount: lp_amount },
            LedgerEffect::TransferOut {
                mint: config.mint_x.clone(),
                side: PoolSide::X,
                amount: amount_x,
                expected_net: None,
            },
            LedgerEffect::TransferOut {
                mint: config.mint_y.clone(),
                side: PoolSide::Y,
                amount: amount_y,
                expected_net: None,
            },
        ],
        event: PoolEvent::Withdrawn {
            amount_x,
            amount_y,
            lp_burned: lp_amount,
        },
    })
}
