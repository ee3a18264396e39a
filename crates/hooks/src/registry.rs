//! Per-mint hook registration and settlement configuration.
//!
//! The registry is the process-wide bootstrap record of the hook system:
//! created once, it names the hook program it serves and the settlement
//! accounts fees move through, and owns one [`FeeStats`] record per
//! activated mint. A mint is either Uninitialized (no record; transfers
//! fail) or Active (every transfer updates its stats); activation happens
//! exactly once and is never reversed.

use crate::errors::HookError;
use crate::stats::FeeStats;
use hookswap_domain::token::{AccountId, MintId, ProgramId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Bootstrap configuration and per-mint activation state of the hook
/// system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookRegistry {
    /// The hook controller program this registry serves. Invocations
    /// claiming any other program are rejected.
    pub hook_program: ProgramId,
    /// Mint of the settlement asset fees are extracted in (wrapped native
    /// token).
    pub settlement_mint: MintId,
    /// Delegate principal holding the pre-established allowance.
    pub delegate: AccountId,
    /// The delegate's settlement token account fees are paid from.
    pub delegate_settlement_account: AccountId,
    /// Account collected fees accumulate in.
    pub fee_collection_account: AccountId,
    stats: HashMap<MintId, FeeStats>,
}

impl HookRegistry {
    #[must_use]
    pub fn new(
        hook_program: ProgramId,
        settlement_mint: MintId,
        delegate: AccountId,
        delegate_settlement_account: AccountId,
        fee_collection_account: AccountId,
    ) -> Self {
        Self {
            hook_program,
            settlement_mint,
            delegate,
            delegate_settlement_account,
            fee_collection_account,
            stats: HashMap::new(),
        }
    }

    /// Activates the hook for `mint`, allocating its fee-stats record with
    /// the supplied fee range. Fails if the mint is already active.
    pub fn initialize_mint(
        &mut self,
        mint: MintId,
        base_fee_basis_points: u16,
        max_fee_basis_points: u16,
        now: i64,
    ) -> Result<&FeeStats, HookError> {
        if self.stats.contains_key(&mint) {
            return Err(HookError::AlreadyInitialized);
        }
        let stats = FeeStats::new(base_fee_basis_points, max_fee_basis_points, now)?;
        info!(
            mint = %mint,
            base = base_fee_basis_points,
            max = max_fee_basis_points,
            "Hook activated for mint"
        );
        Ok(self.stats.entry(mint).or_insert(stats))
    }

    pub fn is_active(&self, mint: &MintId) -> bool {
        self.stats.contains_key(mint)
    }

    pub fn stats(&self, mint: &MintId) -> Option<&FeeStats> {
        self.stats.get(mint)
    }

    pub(crate) fn stats_mut(&mut self, mint: &MintId) -> Option<&mut FeeStats> {
        self.stats.get_mut(mint)
    }
}
