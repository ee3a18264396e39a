//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use hookswap_hooks::prelude::*;
//! ```

// Account roles
pub use crate::accounts::HookAccountRole;

// Controller
pub use crate::controller::{
    HookEffect, SettlementTransfer, TransferContext, TransferHookController,
};

// Errors
pub use crate::errors::HookError;

// Registry
pub use crate::registry::HookRegistry;

// Stats engine
pub use crate::stats::{FeeCurveConfig, FeeStats};

// Window
pub use crate::window::{MinuteWindow, WINDOW_SLOTS};
