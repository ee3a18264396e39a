//! Minute-bucket ring buffer.
//!
//! Six slots, one per minute, tracking transfer counts and volume over the
//! trailing window. Rollover is a pure function of elapsed whole minutes so
//! the buffer is testable without a clock.

use crate::errors::HookError;
use serde::{Deserialize, Serialize};

/// Number of minute buckets in the sliding window.
pub const WINDOW_SLOTS: usize = 6;

/// Sliding-window transfer histogram for one mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MinuteWindow {
    /// Transfers recorded per minute bucket.
    pub transfer_counts: [u64; WINDOW_SLOTS],
    /// Volume recorded per minute bucket, in base units.
    pub volumes: [u64; WINDOW_SLOTS],
    /// Index of the bucket corresponding to "now".
    pub current_slot: u8,
}

impl MinuteWindow {
    /// Rolls the window forward by `elapsed_minutes`, zero-filling every
    /// bucket entered. Rolling a full window or more clears the buffer
    /// outright.
    pub fn advance(&mut self, elapsed_minutes: u64) {
        if elapsed_minutes == 0 {
            return;
        }
        if elapsed_minutes >= WINDOW_SLOTS as u64 {
            self.transfer_counts = [0; WINDOW_SLOTS];
            self.volumes = [0; WINDOW_SLOTS];
            return;
        }
        for _ in 0..elapsed_minutes {
            self.current_slot = (self.current_slot + 1) % WINDOW_SLOTS as u8;
            let slot = self.current_slot as usize;
            self.transfer_counts[slot] = 0;
            self.volumes[slot] = 0;
        }
    }

    /// Records one transfer of `amount` in the current bucket.
    pub fn record(&mut self, amount: u64) -> Result<(), HookError> {
        let slot = self.current_slot as usize;
        self.transfer_counts[slot] = self.transfer_counts[slot]
            .checked_add(1)
            .ok_or(HookError::MathOverflow)?;
        self.volumes[slot] = self.volumes[slot]
            .checked_add(amount)
            .ok_or(HookError::MathOverflow)?;
        Ok(())
    }

    /// Transfers across the whole trailing window.
    pub fn transfers_per_window(&self) -> Result<u64, HookError> {
        self.transfer_counts
            .iter()
            .try_fold(0u64, |acc, count| acc.checked_add(*count))
            .ok_or(HookError::MathOverflow)
    }

    /// Volume across the whole trailing window.
    pub fn volume_per_window(&self) -> Result<u64, HookError> {
        self.volumes
            .iter()
            .try_fold(0u64, |acc, volume| acc.checked_add(*volume))
            .ok_or(HookError::MathOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut window = MinuteWindow::default();
        window.record(100).unwrap();
        window.record(50).unwrap();
        assert_eq!(window.transfers_per_window().unwrap(), 2);
        assert_eq!(window.volume_per_window().unwrap(), 150);
    }

    #[test]
    fn test_advance_zero_fills_entered_slots() {
        let mut window = MinuteWindow::default();
        window.record(100).unwrap();
        window.advance(2);
        window.record(10).unwrap();
        // the first bucket still counts, two fresh buckets were entered
        assert_eq!(window.transfers_per_window().unwrap(), 2);
        assert_eq!(window.volume_per_window().unwrap(), 110);
        assert_eq!(window.current_slot, 2);
    }

    #[test]
    fn test_advance_wraps_and_evicts() {
        let mut window = MinuteWindow::default();
        window.record(100).unwrap();
        // five rolls later the first bucket is the next to be entered
        window.advance(5);
        assert_eq!(window.volume_per_window().unwrap(), 100);
        window.advance(1);
        assert_eq!(window.volume_per_window().unwrap(), 0);
    }

    #[test]
    fn test_advance_full_window_clears() {
        let mut window = MinuteWindow::default();
        for _ in 0..4 {
            window.record(25).unwrap();
            window.advance(1);
        }
        assert_eq!(window.volume_per_window().unwrap(), 100);
        window.advance(WINDOW_SLOTS as u64);
        assert_eq!(window.transfers_per_window().unwrap(), 0);
        assert_eq!(window.volume_per_window().unwrap(), 0);
    }

    #[test]
    fn test_record_overflow() {
        let mut window = MinuteWindow::default();
        window.record(u64::MAX).unwrap();
        assert_eq!(window.record(1).unwrap_err(), HookError::MathOverflow);
    }

    #[test]
    fn test_window_sum_overflow() {
        let mut window = MinuteWindow::default();
        window.volumes = [u64::MAX, 1, 0, 0, 0, 0];
        assert_eq!(
            window.volume_per_window().unwrap_err(),
            HookError::MathOverflow
        );
    }
}
