//! Account roles the controller requires per invocation.
//!
//! The ledger resolves each role to a concrete account before dispatching
//! the hook. The order and role set is the portable contract; how the
//! embedder resolves them is its own business.

use serde::{Deserialize, Serialize};

/// One account the hook controller needs alongside a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookAccountRole {
    /// The stored list of extra account metadata for the mint.
    ExtraMetaList,
    /// Wrapped-native settlement mint.
    SettlementMint,
    /// Token program owning the settlement mint.
    SettlementTokenProgram,
    AssociatedTokenProgram,
    /// Delegate principal holding the fee allowance.
    Delegate,
    /// Delegate's settlement token account, debited for fees.
    DelegateSettlementAccount,
    /// Settlement account linked to the transfer source (the pool's own on
    /// vault-outbound transfers).
    SourceSettlementAccount,
    /// The mint's fee-stats record.
    FeeStats,
    /// The hook controller program itself.
    HookProgram,
}

impl HookAccountRole {
    /// Roles in the exact order the controller expects them.
    pub const ORDER: [HookAccountRole; 9] = [
        HookAccountRole::ExtraMetaList,
        HookAccountRole::SettlementMint,
        HookAccountRole::SettlementTokenProgram,
        HookAccountRole::AssociatedTokenProgram,
        HookAccountRole::Delegate,
        HookAccountRole::DelegateSettlementAccount,
        HookAccountRole::SourceSettlementAccount,
        HookAccountRole::FeeStats,
        HookAccountRole::HookProgram,
    ];

    /// Whether the role's account is mutated during the invocation.
    pub fn is_writable(self) -> bool {
        matches!(
            self,
            HookAccountRole::Delegate
                | HookAccountRole::DelegateSettlementAccount
                | HookAccountRole::SourceSettlementAccount
                | HookAccountRole::FeeStats
        )
    }
}
