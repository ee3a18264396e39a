//! AMM state-transition operations.
//!
//! Each operation validates its preconditions against the pool record,
//! computes amounts on the constant-product curve, and only then commits:
//! mutations are staged on a copy of the record so a failing leg can never
//! leave partial state behind.

pub mod admin;
pub mod deposit;
pub mod initialize;
pub mod swap;
pub mod withdraw;

pub use admin::{
    CollectFeesOutcome, collect_fees, lock, unlock, update_fee_destination, update_hook_program,
    update_transfer_fee_config,
};
pub use deposit::{DepositOutcome, deposit};
pub use initialize::{InitializeOutcome, InitializeParams, initialize};
pub use swap::{SwapOutcome, swap};
pub use withdraw::{WithdrawOutcome, withdraw};
