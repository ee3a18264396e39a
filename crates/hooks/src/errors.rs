//! Hook-engine errors.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the fee-stats engine and the transfer-hook
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum HookError {
    /// Counter arithmetic wrapped.
    #[error("Math overflow in calculations")]
    MathOverflow,
    /// Hook invoked outside a real transfer, or with a zero amount.
    #[error("The token is not currently transferring")]
    InvalidTransferState,
    /// Fee rate or fee amount could not be computed.
    #[error("Fee calculation failed")]
    FeeCalculationFailed,
    /// Minute-window rollover could not be computed.
    #[error("Time window update failed")]
    TimeWindowUpdateFailed,
    /// Transfer of a mint with no fee-stats record.
    #[error("Transfer hook not initialized for this mint")]
    HookNotInitialized,
    /// Fee stats already exist for this mint.
    #[error("Transfer hook already initialized for this mint")]
    AlreadyInitialized,
    /// Invoking hook program is not the registered one.
    #[error("Hook program not in approved list")]
    UnsupportedHookProgram,
    /// Invocation id was already processed.
    #[error("Transfer invocation already processed")]
    DuplicateInvocation,
}
