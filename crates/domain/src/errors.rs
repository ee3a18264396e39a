//! Error taxonomy shared by the pool record and every AMM operation.
//!
//! Every error is an ordinary, expected outcome of invalid input or state:
//! an operation either commits fully or returns one of these with no
//! partial state change.

use serde::{Deserialize, Serialize};

/// Errors surfaced by pool configuration and AMM operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum AmmError {
    /// Mutating operation attempted on a locked pool.
    #[error("This pool is locked.")]
    PoolLocked,
    /// Swap or deposit exceeded the caller's slippage bound.
    #[error("Slippage exceeded.")]
    SlippageExceeded,
    /// Fixed-width addition or multiplication wrapped.
    #[error("Overflow detected.")]
    Overflow,
    /// Debit or burn would drive a balance negative.
    #[error("Underflow detected.")]
    Underflow,
    /// Token does not belong to this pool.
    #[error("Invalid token.")]
    InvalidToken,
    /// Withdraw produced less than the caller's minimum.
    #[error("Actual liquidity is less than minimum.")]
    LiquidityLessThanMinimum,
    /// Operation requires a funded pool.
    #[error("No liquidity in pool.")]
    NoLiquidityInPool,
    /// Constant-product invariant violated after computation.
    #[error("Curve error.")]
    CurveError,
    /// Fee parameter above 100%.
    #[error("Fee is greater than 100%. This is not a very good deal.")]
    InvalidFee,
    /// Caller is not the pool authority.
    #[error("Invalid update authority.")]
    InvalidAuthority,
    /// Authority-gated operation on a pool with no authority.
    #[error("No update authority set.")]
    NoAuthoritySet,
    /// Zero or otherwise malformed amount.
    #[error("Invalid amount.")]
    InvalidAmount,
    /// Transfer-hook extension expected but absent on the mint.
    #[error("Transfer hook extension not found.")]
    TransferHookNotFound,
    /// Transfer-fee extension expected but absent on the mint.
    #[error("Transfer fee extension not found.")]
    TransferFeeNotFound,
    /// Both sides of the pair are the same mint.
    #[error("Identical mints not allowed")]
    IdenticalMints,
    /// Mint is owned by a token program the pool does not accept.
    #[error("Invalid token program")]
    InvalidTokenProgram,
    /// Mint carries an extension the pool cannot handle.
    #[error("Unsupported token extension")]
    UnsupportedExtension,
    /// Counter arithmetic wrapped.
    #[error("Math Overflow")]
    MathOverflow,
    /// Balance too small for the requested movement.
    #[error("Insufficient funds")]
    InsufficientFunds,
    /// Hook program is not in the pool's approved list.
    #[error("Hook program not in approved list")]
    UnsupportedHookProgram,
}
