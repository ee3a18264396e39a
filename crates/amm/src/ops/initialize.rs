//! Pool creation.

use crate::config::PoolConfig;
use crate::events::PoolEvent;
use hookswap_domain::enums::TokenExtension;
use hookswap_domain::errors::AmmError;
use hookswap_domain::math::transfer_fee::TransferFeeParams;
use hookswap_domain::token::{AccountId, ProgramId, Token};
use hookswap_domain::value_objects::BasisPoints;
use tracing::info;

/// Inputs for creating a pool.
#[derive(Debug, Clone)]
pub struct InitializeParams {
    pub seed: u64,
    /// Pool swap fee in basis points, at most 10000.
    pub fee_bps: u16,
    pub authority: Option<AccountId>,
    /// Pair tokens with their extension metadata, as reported by the
    /// external extension layer.
    pub token_x: Token,
    pub token_y: Token,
    pub fee_destination: AccountId,
    /// Default Token-2022 transfer fee for newly configured hook tokens.
    pub transfer_fee_basis_points: u16,
    pub max_transfer_fee: u64,
    pub hook_program: Option<ProgramId>,
}

/// Result of a successful initialization. Creation emits no balance
/// mutations; the record itself is the effect.
#[derive(Debug, Clone)]
pub struct InitializeOutcome {
    pub config: PoolConfig,
    pub event: PoolEvent,
}

/// Creates the pool record with zero reserves, zero LP supply, unlocked.
pub fn initialize(params: InitializeParams) -> Result<InitializeOutcome, AmmError> {
    let fee = BasisPoints::new(params.fee_bps)?;
    let default_transfer_fee =
        TransferFeeParams::new(params.transfer_fee_basis_points, params.max_transfer_fee)?;

    if params.token_x.mint == params.token_y.mint {
        return Err(AmmError::IdenticalMints);
    }

    let pair_has = |extension: TokenExtension| {
        params.token_x.has_extension(extension) || params.token_y.has_extension(extension)
    };
    let supports_transfer_hooks = pair_has(TokenExtension::TransferHook);
    let supports_transfer_fees = pair_has(TokenExtension::TransferFee);
    let supports_metadata = pair_has(TokenExtension::Metadata);
    let supports_interest_bearing = pair_has(TokenExtension::InterestBearing);

    // A pool trading hook tokens cannot settle without a hook controller.
    if supports_transfer_hooks && params.hook_program.is_none() {
        return Err(AmmError::TransferHookNotFound);
    }

    let approved_hook_programs = params.hook_program.iter().cloned().collect();

    let config = PoolConfig {
        seed: params.seed,
        authority: params.authority,
        mint_x: params.token_x.mint,
        mint_y: params.token_y.mint,
        reserve_x: 0,
        reserve_y: 0,
        lp_supply: 0,
        fee,
        locked: false,
        fee_destination: params.fee_destination,
        default_transfer_fee,
        hook_program: params.hook_program,
        approved_hook_programs,
        supports_transfer_fees,
        supports_transfer_hooks,
        supports_metadata,
        supports_interest_bearing,
    };

    info!(
        seed = config.seed,
        mint_x = %config.mint_x,
        mint_y = %config.mint_y,
        fee = %config.fee,
        "Pool initialized"
    );

    Ok(InitializeOutcome {
        event: PoolEvent::Initialized {
            seed: config.seed,
            fee_bps: config.fee.value(),
        },
        config,
    })
}
