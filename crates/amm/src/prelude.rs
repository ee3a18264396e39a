//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use hookswap_amm::prelude::*;
//! ```

// Pool record
pub use crate::config::PoolConfig;

// Ledger effects
pub use crate::effects::LedgerEffect;

// Events
pub use crate::events::PoolEvent;

// Operations
pub use crate::ops::{
    CollectFeesOutcome, DepositOutcome, InitializeOutcome, InitializeParams, SwapOutcome,
    WithdrawOutcome, collect_fees, deposit, initialize, lock, swap, unlock,
    update_fee_destination, update_hook_program, update_transfer_fee_config, withdraw,
};
