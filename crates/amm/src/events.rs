//! Pool events for the caller's audit trail.

use hookswap_domain::enums::PoolSide;
use hookswap_domain::token::{AccountId, MintId, ProgramId};
use serde::{Deserialize, Serialize};

/// What happened to a pool, in caller-facing terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    Initialized {
        seed: u64,
        fee_bps: u16,
    },
    Deposited {
        amount_x: u64,
        amount_y: u64,
        lp_minted: u64,
    },
    Withdrawn {
        amount_x: u64,
        amount_y: u64,
        lp_burned: u64,
    },
    Swapped {
        side_in: PoolSide,
        amount_in: u64,
        amount_out: u64,
    },
    Locked,
    Unlocked,
    FeesCollected {
        mint: MintId,
        destination: AccountId,
    },
    FeeDestinationUpdated {
        destination: AccountId,
    },
    HookProgramUpdated {
        program: ProgramId,
    },
    TransferFeeConfigUpdated {
        basis_points: u16,
        maximum_fee: u64,
    },
}
