//! Adding liquidity.

use crate::config::PoolConfig;
use crate::effects::LedgerEffect;
use crate::events::PoolEvent;
use hookswap_domain::enums::PoolSide;
use hookswap_domain::errors::AmmError;
use hookswap_domain::math::liquidity;
use tracing::info;

/// Result of a successful deposit.
#[derive(Debug, Clone)]
pub struct DepositOutcome {
    pub lp_minted: u64,
    pub amount_x: u64,
    pub amount_y: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,
    pub effects: Vec<LedgerEffect>,
    pub event: PoolEvent,
}

/// Deposits liquidity into the pool.
///
/// On the first deposit the caller declares both token amounts via
/// `max_x`/`max_y` and receives `floor(sqrt(x * y))` shares. Afterwards the
/// pool computes the amounts that keep the reserve ratio for
/// `lp_requested` shares, rounding up, and rejects the deposit when either
/// exceeds the caller's maximum.
///
/// Hook-enabled legs additionally trigger the transfer-hook controller as a
/// ledger side effect; the amounts here are the declared ones, not post-fee.
pub fn deposit(
    config: &mut PoolConfig,
    lp_requested: u64,
    max_x: u64,
    max_y: u64,
) -> Result<DepositOutcome, AmmError> {
    config.require_unlocked()?;
    if lp_requested == 0 {
        return Err(AmmError::InvalidAmount);
    }

    let (amount_x, amount_y, lp_minted) = if config.lp_supply == 0 {
        let lp = liquidity::initial_lp_amount(max_x, max_y)?;
        (max_x, max_y, lp)
    } else {
        let (x, y) = liquidity::deposit_amounts(
            lp_requested,
            config.reserve_x,
            config.reserve_y,
            config.lp_supply,
        )?;
        if x > max_x || y > max_y {
            return Err(AmmError::SlippageExceeded);
        }
        (x, y, lp_requested)
    };

    // Stage the mutation so a failing leg leaves the record untouched.
    let mut staged = config.clone();
    staged.credit(PoolSide::X, amount_x)?;
    staged.credit(PoolSide::Y, amount_y)?;
    staged.mint_lp(lp_minted)?;
    *config = staged;

    info!(
        seed = config.seed,
        amount_x,
        amount_y,
        lp_minted,
        lp_supply = config.lp_supply,
        "Liquidity deposited"
    );

    Ok(DepositOutcome {
        lp_minted,
        amount_x,
        amount_y,
        reserve_x: config.reserve_x,
        reserve_y: config.reserve_y,
        lp_supply: config.lp_supply,
        effects: vec![
            LedgerEffect::TransferIn {
                mint: config.mint_x.clone(),
                side: PoolSide::X,
                amount: amount_x,
            },
            LedgerEffect::TransferIn {
                mint: config.mint_y.clone(),
                side: PoolSide::Y,
                amount: amount_y,
            },
            LedgerEffect::MintLp { amount: lp_minted },
        ],
        event: PoolEvent::Deposited {
            amount_x,
            amount_y,
            lp_minted,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::initialize::{InitializeParams, initialize};
    use hookswap_domain::token::{AccountId, MintId, Token};

    fn fresh_pool() -> PoolConfig {
        initialize(InitializeParams {
            seed: 1,
            fee_bps: 30,
            authority: Some(AccountId::new("authority")),
            token_x: Token::new(MintId::new("mint-x"), "X", 9, "Token X"),
            token_y: Token::new(MintId::new("mint-y"), "Y", 9, "Token Y"),
            fee_destination: AccountId::new("fee-dest"),
            transfer_fee_basis_points: 10,
            max_transfer_fee: 100_000_000,
            hook_program: None,
        })
        .unwrap()
        .config
    }

    #[test]
    fn test_first_deposit_mints_sqrt() {
        let mut pool = fresh_pool();
        let outcome = deposit(&mut pool, 1, 1000, 1000).unwrap();
        assert_eq!(outcome.lp_minted, 1000);
        assert_eq!((pool.reserve_x, pool.reserve_y), (1000, 1000));
        assert_eq!(pool.lp_supply, 1000);
        assert!(pool.reserves_consistent());
        assert_eq!(outcome.effects.len(), 3);
    }

    #[test]
    fn test_first_deposit_rejects_zero_leg() {
        let mut pool = fresh_pool();
        assert_eq!(
            deposit(&mut pool, 1, 0, 1000).unwrap_err(),
            AmmError::InvalidAmount
        );
        assert_eq!(pool.lp_supply, 0);
    }

    #[test]
    fn test_proportional_deposit_rounds_up() {
        let mut pool = fresh_pool();
        deposit(&mut pool, 1, 1000, 900).unwrap();
        // 100 shares of (1000, 900) over 948 shares:
        // ceil(100 * 1000 / 948) = 106, ceil(100 * 900 / 948) = 95
        let outcome = deposit(&mut pool, 100, 106, 95).unwrap();
        assert_eq!((outcome.amount_x, outcome.amount_y), (106, 95));
        assert_eq!(outcome.lp_minted, 100);
        assert_eq!(pool.lp_supply, 1048);
    }

    #[test]
    fn test_deposit_slippage_bound() {
        let mut pool = fresh_pool();
        deposit(&mut pool, 1, 1000, 900).unwrap();
        let before = pool.clone();
        assert_eq!(
            deposit(&mut pool, 100, 105, 95).unwrap_err(),
            AmmError::SlippageExceeded
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn test_deposit_locked_pool() {
        let mut pool = fresh_pool();
        pool.locked = true;
        assert_eq!(
            deposit(&mut pool, 1, 1000, 1000).unwrap_err(),
            AmmError::PoolLocked
        );
    }

    #[test]
    fn test_deposit_zero_lp_request() {
        let mut pool = fresh_pool();
        assert_eq!(
            deposit(&mut pool, 0, 1000, 1000).unwrap_err(),
            AmmError::InvalidAmount
        );
    }
}
