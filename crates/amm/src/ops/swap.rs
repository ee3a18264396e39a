//! Swapping along the constant-product curve.

use crate::config::PoolConfig;
use crate::effects::LedgerEffect;
use crate::events::PoolEvent;
use hookswap_domain::enums::{PoolSide, TokenExtension};
use hookswap_domain::errors::AmmError;
use hookswap_domain::math::constant_product::{constant_k, swap_out_amount};
use hookswap_domain::math::transfer_fee::TransferFeeParams;
use tracing::{debug, info};

/// Result of a successful swap.
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    pub side_in: PoolSide,
    pub amount_in: u64,
    /// Curve output: what the recipient nets.
    pub amount_out: u64,
    /// What the vault actually pays out; exceeds `amount_out` when the
    /// output mint withholds a transfer fee.
    pub vault_debit: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub effects: Vec<LedgerEffect>,
    pub event: PoolEvent,
}

/// Swaps `amount_in` of one side for the other side's token.
///
/// The pool fee is taken on the input leg. When the output mint withholds a
/// Token-2022 transfer fee (`output_transfer_fee` reported by the extension
/// layer), the vault debit is grossed up so the recipient still nets the
/// curve output; anything below `min_out` net of that fee is rejected as
/// slippage.
pub fn swap(
    config: &mut PoolConfig,
    side_in: PoolSide,
    amount_in: u64,
    min_out: u64,
    output_transfer_fee: Option<TransferFeeParams>,
) -> Result<SwapOutcome, AmmError> {
    config.require_unlocked()?;

    let side_out = side_in.other();
    let reserve_in = config.reserve(side_in);
    let reserve_out = config.reserve(side_out);

    let amount_out = swap_out_amount(amount_in, reserve_in, reserve_out, config.fee.value())?;
    if amount_out < min_out {
        return Err(AmmError::SlippageExceeded);
    }

    // The curve must never lose value on its own amounts.
    let k_before = constant_k(reserve_in, reserve_out);
    let k_after = constant_k(
        reserve_in.checked_add(amount_in).ok_or(AmmError::Overflow)?,
        reserve_out - amount_out,
    );
    if k_after < k_before {
        return Err(AmmError::CurveError);
    }

    // Gross up the vault debit on fee-bearing output mints; the withheld
    // fee lands back in the pool's fee destination on the next sweep.
    let vault_debit = match &output_transfer_fee {
        Some(fee_params) => {
            config.require_extension(TokenExtension::TransferFee)?;
            fee_params.gross_up(amount_out)?
        }
        None => amount_out,
    };
    if vault_debit > reserve_out {
        return Err(AmmError::InsufficientFunds);
    }

    let mut staged = config.clone();
    staged.credit(side_in, amount_in)?;
    staged.debit(side_out, vault_debit)?;
    *config = staged;

    if vault_debit > amount_out {
        debug!(
            seed = config.seed,
            gross = vault_debit,
            net = amount_out,
            "Output leg grossed up for transfer fee"
        );
    }
    info!(
        seed = config.seed,
        ?side_in,
        amount_in,
        amount_out,
        reserve_x = config.reserve_x,
        reserve_y = config.reserve_y,
        "Swap executed"
    );

    Ok(SwapOutcome {
        side_in,
        amount_in,
        amount_out,
        vault_debit,
        reserve_x: config.reserve_x,
        reserve_y: config.reserve_y,
        effects: vec![
            LedgerEffect::TransferIn {
                mint: config.mint_of(side_in).clone(),
                side: side_in,
                amount: amount_in,
            },
            LedgerEffect::TransferOut {
                mint: config.mint_of(side_out).clone(),
                side: side_out,
                amount: vault_debit,
                expected_net: output_transfer_fee.map(|_| amount_out),
            },
        ],
        event: PoolEvent::Swapped {
            side_in,
            amount_in,
            amount_out,
        },
    })
}
