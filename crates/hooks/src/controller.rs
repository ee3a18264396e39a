//! The transfer-hook controller.
//!
//! The external ledger invokes [`TransferHookController::on_transfer`]
//! alongside settlement of every transfer touching a hook-enabled mint.
//! The controller validates the invocation, feeds the transfer through the
//! mint's fee-stats engine, and emits the settlement-asset movement that
//! extracts the fee. It never changes the transferred amount and never
//! blocks the underlying transfer.

use crate::errors::HookError;
use crate::registry::HookRegistry;
use hookswap_domain::token::{AccountId, MintId, ProgramId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Everything the ledger hands the controller about one in-flight
/// transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferContext {
    /// Unique id of this hook invocation; replays are rejected.
    pub invocation: Uuid,
    /// Program the ledger dispatched the hook through.
    pub hook_program: ProgramId,
    pub mint: MintId,
    pub source: AccountId,
    pub destination: AccountId,
    pub amount: u64,
    /// Set by the token layer only while the transfer is actually being
    /// settled.
    pub transferring: bool,
    /// Settlement account linked to the transfer source. For vault-outbound
    /// transfers this is the pool's own settlement account.
    pub source_settlement_account: AccountId,
    /// Unix seconds.
    pub now: i64,
}

/// Movement of the settlement asset extracting the fee, funded from the
/// delegate's pre-established allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementTransfer {
    pub mint: MintId,
    pub from: AccountId,
    pub to: AccountId,
    /// Allowance account the delegate recoups from.
    pub allowance_source: AccountId,
    pub amount: u64,
}

/// What one hook invocation decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEffect {
    pub fee_basis_points: u16,
    pub fee_amount: u64,
    /// Absent when the computed fee rounds to zero.
    pub settlement: Option<SettlementTransfer>,
}

/// Stateful controller wrapping the registry: tracks processed invocation
/// ids so a replayed invocation can never double-count a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferHookController {
    pub registry: HookRegistry,
    processed: HashSet<Uuid>,
}

impl TransferHookController {
    #[must_use]
    pub fn new(registry: HookRegistry) -> Self {
        Self {
            registry,
            processed: HashSet::new(),
        }
    }

    /// Handles one transfer of a hook-enabled mint.
    ///
    /// Fee history is only committed when every validation passes; a
    /// rejected invocation leaves the stats untouched.
    pub fn on_transfer(&mut self, ctx: &TransferContext) -> Result<HookEffect, HookError> {
        if ctx.hook_program != self.registry.hook_program {
            return Err(HookError::UnsupportedHookProgram);
        }
        if !ctx.transferring {
            return Err(HookError::InvalidTransferState);
        }
        if ctx.amount == 0 {
            return Err(HookError::InvalidTransferState);
        }
        if !self.registry.is_active(&ctx.mint) {
            return Err(HookError::HookNotInitialized);
        }
        if self.processed.contains(&ctx.invocation) {
            return Err(HookError::DuplicateInvocation);
        }

        let stats = self
            .registry
            .stats_mut(&ctx.mint)
            .ok_or(HookError::HookNotInitialized)?;
        let fee_basis_points = stats.record_transfer(ctx.amount, ctx.now)?;

        let fee_amount = (ctx.amount as u128)
            .checked_mul(fee_basis_points as u128)
            .ok_or(HookError::FeeCalculationFailed)?
            / 10_000;
        let fee_amount = u64::try_from(fee_amount).map_err(|_| HookError::FeeCalculationFailed)?;

        stats.total_fees_collected = stats
            .total_fees_collected
            .checked_add(fee_amount)
            .ok_or(HookError::MathOverflow)?;
        self.processed.insert(ctx.invocation);

        debug!(
            mint = %ctx.mint,
            amount = ctx.amount,
            fee_basis_points,
            fee_amount,
            "Transfer hook applied"
        );

        let settlement = (fee_amount > 0).then(|| SettlementTransfer {
            mint: self.registry.settlement_mint.clone(),
            from: self.registry.delegate_settlement_account.clone(),
            to: self.registry.fee_collection_account.clone(),
            allowance_source: ctx.source_settlement_account.clone(),
            amount: fee_amount,
        });

        Ok(HookEffect {
            fee_basis_points,
            fee_amount,
            settlement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn controller() -> TransferHookController {
        let mut registry = HookRegistry::new(
            ProgramId::new("hook-program"),
            MintId::new("wrapped-native"),
            AccountId::new("delegate"),
            AccountId::new("delegate-settlement"),
            AccountId::new("fee-collection"),
        );
        registry
            .initialize_mint(MintId::new("hook-mint"), 10, 300, T0)
            .unwrap();
        TransferHookController::new(registry)
    }

    fn ctx(amount: u64) -> TransferContext {
        TransferContext {
            invocation: Uuid::new_v4(),
            hook_program: ProgramId::new("hook-program"),
            mint: MintId::new("hook-mint"),
            source: AccountId::new("sender"),
            destination: AccountId::new("recipient"),
            amount,
            transferring: true,
            source_settlement_account: AccountId::new("sender-settlement"),
            now: T0 + 60,
        }
    }

    #[test]
    fn test_on_transfer_extracts_fee() {
        let mut controller = controller();
        let effect = controller.on_transfer(&ctx(10_000)).unwrap();
        assert_eq!(effect.fee_basis_points, 10);
        // floor(10000 * 10 / 10000) = 10
        assert_eq!(effect.fee_amount, 10);
        let settlement = effect.settlement.unwrap();
        assert_eq!(settlement.mint, MintId::new("wrapped-native"));
        assert_eq!(settlement.from, AccountId::new("delegate-settlement"));
        assert_eq!(settlement.to, AccountId::new("fee-collection"));
        assert_eq!(settlement.allowance_source, AccountId::new("sender-settlement"));
        assert_eq!(settlement.amount, 10);

        let stats = controller.registry.stats(&MintId::new("hook-mint")).unwrap();
        assert_eq!(stats.total_fees_collected, 10);
        assert_eq!(stats.total_transfers, 1);
    }

    #[test]
    fn test_tiny_transfer_has_no_settlement() {
        let mut controller = controller();
        // floor(100 * 10 / 10000) = 0
        let effect = controller.on_transfer(&ctx(100)).unwrap();
        assert_eq!(effect.fee_amount, 0);
        assert!(effect.settlement.is_none());
    }

    #[test]
    fn test_rejects_outside_transfer() {
        let mut controller = controller();
        let mut context = ctx(10_000);
        context.transferring = false;
        assert_eq!(
            controller.on_transfer(&context).unwrap_err(),
            HookError::InvalidTransferState
        );
    }

    #[test]
    fn test_rejects_zero_amount() {
        let mut controller = controller();
        assert_eq!(
            controller.on_transfer(&ctx(0)).unwrap_err(),
            HookError::InvalidTransferState
        );
    }

    #[test]
    fn test_rejects_unknown_mint() {
        let mut controller = controller();
        let mut context = ctx(10_000);
        context.mint = MintId::new("plain-mint");
        assert_eq!(
            controller.on_transfer(&context).unwrap_err(),
            HookError::HookNotInitialized
        );
    }

    #[test]
    fn test_rejects_foreign_hook_program() {
        let mut controller = controller();
        let mut context = ctx(10_000);
        context.hook_program = ProgramId::new("rogue-program");
        assert_eq!(
            controller.on_transfer(&context).unwrap_err(),
            HookError::UnsupportedHookProgram
        );
    }

    #[test]
    fn test_duplicate_invocation_leaves_stats_alone() {
        let mut controller = controller();
        let context = ctx(10_000);
        controller.on_transfer(&context).unwrap();
        assert_eq!(
            controller.on_transfer(&context).unwrap_err(),
            HookError::DuplicateInvocation
        );
        let stats = controller.registry.stats(&MintId::new("hook-mint")).unwrap();
        assert_eq!(stats.total_transfers, 1);
        assert_eq!(stats.total_fees_collected, 10);
    }
}
