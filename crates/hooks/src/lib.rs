//! Dynamic-fee transfer hook engine.
//!
//! Transfers of a hook-enabled mint are charged a time-varying fee derived
//! from recent transfer velocity. This crate provides:
//! - A 6-minute sliding-window velocity histogram per mint
//! - The fee-rate engine mapping velocity to basis points
//! - The per-mint hook registry (activation lifecycle)
//! - The transfer-hook controller invoked by the ledger on every transfer

/// Prelude module for convenient imports.
pub mod prelude;

/// Account roles the controller requires per invocation.
pub mod accounts;
/// The transfer-hook controller.
pub mod controller;
/// Hook-engine errors.
pub mod errors;
/// Per-mint hook registration and settlement configuration.
pub mod registry;
/// Per-mint velocity statistics and fee derivation.
pub mod stats;
/// Minute-bucket ring buffer.
pub mod window;
