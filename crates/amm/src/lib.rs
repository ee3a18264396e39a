//! Constant-product pool state and operations.
//!
//! This crate owns the authoritative record of one trading pair
//! ([`config::PoolConfig`]) and the state-transition operations over it:
//! - Initialize, Deposit, Withdraw, Swap
//! - Lock/Unlock, CollectFees, UpdateConfig
//!
//! Operations are pure read-modify-write functions: they validate
//! preconditions, compute amounts on the constant-product curve, mutate the
//! record only once every check has passed, and emit the ordered
//! balance-mutation effects the external ledger applies atomically.

/// Prelude module for convenient imports.
pub mod prelude;

/// The pool configuration record and its reserve mutators.
pub mod config;
/// Balance-mutation effects handed to the external ledger.
pub mod effects;
/// Pool events for the caller's audit trail.
pub mod events;
/// AMM state-transition operations.
pub mod ops;
