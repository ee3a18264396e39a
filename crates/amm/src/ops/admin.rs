//! Authority-gated operations: lock state, fee collection, config updates.
//!
//! All of these work on a locked or unlocked pool; they require the pool
//! authority. Re-locking a locked pool (or re-unlocking an unlocked one) is
//! allowed and leaves the state unchanged.

use crate::config::PoolConfig;
use crate::effects::LedgerEffect;
use crate::events::PoolEvent;
use hookswap_domain::enums::TokenExtension;
use hookswap_domain::errors::AmmError;
use hookswap_domain::math::transfer_fee::TransferFeeParams;
use hookswap_domain::token::{AccountId, MintId, ProgramId};
use tracing::info;

/// Result of a fee sweep request.
#[derive(Debug, Clone)]
pub struct CollectFeesOutcome {
    pub mint: MintId,
    pub destination: AccountId,
    pub effects: Vec<LedgerEffect>,
    pub event: PoolEvent,
}

/// Locks the pool: Deposit/Withdraw/Swap are rejected until unlock.
pub fn lock(config: &mut PoolConfig, caller: &AccountId) -> Result<PoolEvent, AmmError> {
    config.require_authority(caller)?;
    config.locked = true;
    info!(seed = config.seed, "Pool locked");
    Ok(PoolEvent::Locked)
}

/// Unlocks the pool.
pub fn unlock(config: &mut PoolConfig, caller: &AccountId) -> Result<PoolEvent, AmmError> {
    config.require_authority(caller)?;
    config.locked = false;
    info!(seed = config.seed, "Pool unlocked");
    Ok(PoolEvent::Unlocked)
}

/// Requests a sweep of withheld Token-2022 transfer fees on `mint` from the
/// supplied accounts into the pool's fee destination. The core authorizes
/// and books the sweep; the token layer performs it.
pub fn collect_fees(
    config: &mut PoolConfig,
    caller: &AccountId,
    mint: &MintId,
    sources: Vec<AccountId>,
) -> Result<CollectFeesOutcome, AmmError> {
    config.require_authority(caller)?;
    config.require_extension(TokenExtension::TransferFee)?;
    config.side_of(mint)?;

    let destination = config.fee_destination.clone();
    info!(
        seed = config.seed,
        mint = %mint,
        destination = %destination,
        sources = sources.len(),
        "Withheld fees swept"
    );

    Ok(CollectFeesOutcome {
        mint: mint.clone(),
        destination: destination.clone(),
        effects: vec![LedgerEffect::SweepWithheldFees {
            mint: mint.clone(),
            sources,
            destination: destination.clone(),
        }],
        event: PoolEvent::FeesCollected {
            mint: mint.clone(),
            destination,
        },
    })
}

/// Points collected transfer fees at a new destination.
pub fn update_fee_destination(
    config: &mut PoolConfig,
    caller: &AccountId,
    new_destination: AccountId,
) -> Result<PoolEvent, AmmError> {
    config.require_authority(caller)?;
    config.fee_destination = new_destination.clone();
    info!(seed = config.seed, destination = %new_destination, "Fee destination updated");
    Ok(PoolEvent::FeeDestinationUpdated {
        destination: new_destination,
    })
}

/// Switches the pool to a different hook controller. The new controller
/// must already be in the approved list.
pub fn update_hook_program(
    config: &mut PoolConfig,
    caller: &AccountId,
    new_hook_program: ProgramId,
) -> Result<PoolEvent, AmmError> {
    config.require_authority(caller)?;
    config.require_approved_hook(&new_hook_program)?;
    config.hook_program = Some(new_hook_program.clone());
    info!(seed = config.seed, program = %new_hook_program, "Hook program updated");
    Ok(PoolEvent::HookProgramUpdated {
        program: new_hook_program,
    })
}

/// Updates the default transfer-fee parameters for newly configured hook
/// tokens.
pub fn update_transfer_fee_config(
    config: &mut PoolConfig,
    caller: &AccountId,
    new_basis_points: u16,
    new_maximum_fee: u64,
) -> Result<PoolEvent, AmmError> {
    config.require_authority(caller)?;
    config.require_extension(TokenExtension::TransferFee)?;
    config.default_transfer_fee = TransferFeeParams::new(new_basis_points, new_maximum_fee)?;
    info!(
        seed = config.seed,
        basis_points = new_basis_points,
        maximum_fee = new_maximum_fee,
        "Transfer fee config updated"
    );
    Ok(PoolEvent::TransferFeeConfigUpdated {
        basis_points: new_basis_points,
        maximum_fee: new_maximum_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::initialize::{InitializeParams, initialize};
    use hookswap_domain::token::Token;

    fn authority() -> AccountId {
        AccountId::new("authority")
    }

    fn pool_with(fee_bearing: bool) -> PoolConfig {
        let with_fee = |token: Token| {
            if fee_bearing {
                token.with_extension(TokenExtension::TransferFee)
            } else {
                token
            }
        };
        initialize(InitializeParams {
            seed: 1,
            fee_bps: 30,
            authority: Some(authority()),
            token_x: with_fee(Token::new(MintId::new("mint-x"), "X", 9, "Token X")),
            token_y: with_fee(Token::new(MintId::new("mint-y"), "Y", 9, "Token Y")),
            fee_destination: AccountId::new("fee-dest"),
            transfer_fee_basis_points: 10,
            max_transfer_fee: 100_000_000,
            hook_program: None,
        })
        .unwrap()
        .config
    }

    #[test]
    fn test_lock_twice_is_noop() {
        let mut pool = pool_with(false);
        assert_eq!(lock(&mut pool, &authority()).unwrap(), PoolEvent::Locked);
        assert!(pool.locked);
        // second lock succeeds and changes nothing
        assert_eq!(lock(&mut pool, &authority()).unwrap(), PoolEvent::Locked);
        assert!(pool.locked);
        unlock(&mut pool, &authority()).unwrap();
        assert!(!pool.locked);
    }

    #[test]
    fn test_lock_requires_authority() {
        let mut pool = pool_with(false);
        assert_eq!(
            lock(&mut pool, &AccountId::new("stranger")).unwrap_err(),
            AmmError::InvalidAuthority
        );
        pool.authority = None;
        assert_eq!(
            lock(&mut pool, &authority()).unwrap_err(),
            AmmError::NoAuthoritySet
        );
    }

    #[test]
    fn test_collect_fees() {
        let mut pool = pool_with(true);
        let outcome = collect_fees(
            &mut pool,
            &authority(),
            &MintId::new("mint-x"),
            vec![AccountId::new("holder-1"), AccountId::new("holder-2")],
        )
        .unwrap();
        assert_eq!(outcome.destination, AccountId::new("fee-dest"));
        match &outcome.effects[0] {
            LedgerEffect::SweepWithheldFees { sources, .. } => assert_eq!(sources.len(), 2),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_collect_fees_needs_extension() {
        let mut pool = pool_with(false);
        assert_eq!(
            collect_fees(&mut pool, &authority(), &MintId::new("mint-x"), vec![]).unwrap_err(),
            AmmError::TransferFeeNotFound
        );
    }

    #[test]
    fn test_collect_fees_foreign_mint() {
        let mut pool = pool_with(true);
        assert_eq!(
            collect_fees(&mut pool, &authority(), &MintId::new("other"), vec![]).unwrap_err(),
            AmmError::InvalidToken
        );
    }

    #[test]
    fn test_update_fee_destination() {
        let mut pool = pool_with(false);
        update_fee_destination(&mut pool, &authority(), AccountId::new("new-dest")).unwrap();
        assert_eq!(pool.fee_destination, AccountId::new("new-dest"));
    }

    #[test]
    fn test_update_hook_program_needs_approval() {
        let mut pool = pool_with(false);
        let unapproved = ProgramId::new("rogue-hook");
        assert_eq!(
            update_hook_program(&mut pool, &authority(), unapproved.clone()).unwrap_err(),
            AmmError::UnsupportedHookProgram
        );

        pool.approved_hook_programs.push(unapproved.clone());
        update_hook_program(&mut pool, &authority(), unapproved.clone()).unwrap();
        assert_eq!(pool.hook_program, Some(unapproved));
    }

    #[test]
    fn test_update_transfer_fee_config() {
        let mut pool = pool_with(true);
        update_transfer_fee_config(&mut pool, &authority(), 50, 5_000).unwrap();
        assert_eq!(pool.default_transfer_fee.basis_points, 50);
        assert_eq!(pool.default_transfer_fee.maximum_fee, 5_000);
        assert_eq!(
            update_transfer_fee_config(&mut pool, &authority(), 10_001, 0).unwrap_err(),
            AmmError::InvalidFee
        );
    }
}
