//! Balance-mutation effects emitted by pool operations.
//!
//! The core never moves tokens itself. Each operation returns an ordered
//! list of effects and the external ledger applies them as one atomic unit;
//! if any leg cannot settle, none may.

use hookswap_domain::enums::PoolSide;
use hookswap_domain::token::{AccountId, MintId};
use serde::{Deserialize, Serialize};

/// One balance mutation the external ledger must apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEffect {
    /// Move `amount` of one pair side from the caller into the vault.
    TransferIn {
        mint: MintId,
        side: PoolSide,
        amount: u64,
    },
    /// Move `amount` of one pair side from the vault to the caller.
    /// `expected_net` is set on fee-bearing mints: the recipient must
    /// receive at least this much after the token layer withholds its fee.
    TransferOut {
        mint: MintId,
        side: PoolSide,
        amount: u64,
        expected_net: Option<u64>,
    },
    /// Mint `amount` LP shares to the depositor.
    MintLp { amount: u64 },
    /// Burn `amount` LP shares from the withdrawer.
    BurnLp { amount: u64 },
    /// Sweep withheld transfer fees on `mint` from `sources` into
    /// `destination`.
    SweepWithheldFees {
        mint: MintId,
        sources: Vec<AccountId>,
        destination: AccountId,
    },
}
