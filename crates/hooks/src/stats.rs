//! Per-mint velocity statistics and fee derivation.
//!
//! Every transfer of a hook-enabled mint lands here: the minute window is
//! rolled forward, counters are bumped, and the current fee rate is
//! re-derived from trailing transfer velocity. The mapping is tiered and
//! monotonic in velocity, smoothed so the published rate never jumps more
//! than one base-fee step per transfer, and clamped into `[base, max]`.

use crate::errors::HookError;
use crate::window::MinuteWindow;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shape of the velocity-to-fee mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCurveConfig {
    /// Transfers-per-window thresholds for each tier, ascending. Velocity
    /// beyond the last threshold saturates at the max fee.
    pub tier_thresholds: [u64; 4],
    /// Base-fee multipliers for the middle tiers; the first tier charges
    /// the base fee itself.
    pub tier_multipliers: [u16; 3],
    /// A transfer this many times the running average triggers the surge
    /// multiplier (3/2) on the derived fee.
    pub surge_size_ratio: u64,
}

impl Default for FeeCurveConfig {
    fn default() -> Self {
        Self {
            tier_thresholds: [10, 30, 60, 120],
            tier_multipliers: [2, 5, 12],
            surge_size_ratio: 10,
        }
    }
}

/// Velocity statistics and derived fee rate for one hook-enabled mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStats {
    pub total_fees_collected: u64,
    pub total_transfers: u64,
    pub total_volume: u64,
    /// Derived output, always within `[base, max]`.
    pub current_fee_basis_points: u16,
    pub base_fee_basis_points: u16,
    pub max_fee_basis_points: u16,
    pub window: MinuteWindow,
    /// Timestamp of the last window rollover, unix seconds.
    pub last_update_timestamp: i64,
    /// Running max of window transfers-per-second. Monitoring only.
    pub peak_tps: u16,
    /// Running mean transfer size. Monitoring only.
    pub avg_transfer_size: u64,
    pub curve: FeeCurveConfig,
}

impl FeeStats {
    /// Creates the record for a newly activated mint. The fee range must
    /// be well-formed: `base <= max <= 10000`.
    pub fn new(
        base_fee_basis_points: u16,
        max_fee_basis_points: u16,
        now: i64,
    ) -> Result<Self, HookError> {
        if base_fee_basis_points > max_fee_basis_points || max_fee_basis_points > 10_000 {
            return Err(HookError::FeeCalculationFailed);
        }
        Ok(Self {
            total_fees_collected: 0,
            total_transfers: 0,
            total_volume: 0,
            current_fee_basis_points: base_fee_basis_points,
            base_fee_basis_points,
            max_fee_basis_points,
            window: MinuteWindow::default(),
            last_update_timestamp: now,
            peak_tps: 0,
            avg_transfer_size: 0,
            curve: FeeCurveConfig::default(),
        })
    }

    /// Records one transfer and returns the fee rate to charge for it.
    pub fn record_transfer(&mut self, amount: u64, now: i64) -> Result<u16, HookError> {
        if amount == 0 {
            return Err(HookError::InvalidTransferState);
        }

        let elapsed = now
            .checked_sub(self.last_update_timestamp)
            .ok_or(HookError::TimeWindowUpdateFailed)?;
        // Clock skew backwards is treated as no elapsed time.
        let elapsed_minutes = if elapsed > 0 { (elapsed / 60) as u64 } else { 0 };
        if elapsed_minutes > 0 {
            self.window.advance(elapsed_minutes);
            self.last_update_timestamp = now;
        }

        self.window.record(amount)?;
        self.total_transfers = self
            .total_transfers
            .checked_add(1)
            .ok_or(HookError::MathOverflow)?;
        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(HookError::MathOverflow)?;
        self.avg_transfer_size = if self.total_transfers == 0 {
            0
        } else {
            self.total_volume / self.total_transfers
        };

        let tpm = self.window.transfers_per_window()?;
        let tps = u16::try_from(tpm / 60).unwrap_or(u16::MAX);
        if tps > self.peak_tps {
            self.peak_tps = tps;
        }

        let fee = self.derive_fee(tpm, amount)?;
        self.current_fee_basis_points = fee;
        Ok(fee)
    }

    fn derive_fee(&self, tpm: u64, amount: u64) -> Result<u16, HookError> {
        let base = self.base_fee_basis_points;
        let max = self.max_fee_basis_points;
        let [t1, t2, t3, saturation] = self.curve.tier_thresholds;
        let [m2, m3, m4] = self.curve.tier_multipliers;

        let target = if tpm <= t1 {
            u32::from(base)
        } else if tpm <= t2 {
            u32::from(base) * u32::from(m2)
        } else if tpm <= t3 {
            u32::from(base) * u32::from(m3)
        } else if tpm <= saturation {
            u32::from(base) * u32::from(m4)
        } else {
            u32::from(max)
        };
        let target = u16::try_from(target.min(u32::from(max)))
            .map_err(|_| HookError::FeeCalculationFailed)?;

        // One base-fee step per transfer, in either direction.
        let current = self.current_fee_basis_points;
        let mut fee = if target > current {
            target.min(current + base)
        } else {
            target.max(current.saturating_sub(base))
        };

        // Outsized transfers pay a surge premium.
        if self.avg_transfer_size > 0 {
            let surge_floor = self
                .avg_transfer_size
                .checked_mul(self.curve.surge_size_ratio)
                .ok_or(HookError::FeeCalculationFailed)?;
            if amount > surge_floor {
                fee = (fee / 2 * 3).saturating_add(fee % 2).min(max);
                warn!(amount, avg = self.avg_transfer_size, fee, "Surge fee engaged");
            }
        }

        Ok(fee.clamp(base, max))
    }
}
