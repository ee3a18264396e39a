//! The authoritative record of one trading pair.
//!
//! `PoolConfig` holds the reserves, fee rate, lock flag, authority and
//! Token-2022 extension metadata for a pool. The operations in [`crate::ops`]
//! are its sole writers; the mutators here enforce the reserve invariants
//! (no wraparound, no negative balances, LP supply moves with reserves).

use hookswap_domain::enums::{PoolSide, TokenExtension};
use hookswap_domain::errors::AmmError;
use hookswap_domain::math::transfer_fee::TransferFeeParams;
use hookswap_domain::token::{AccountId, MintId, ProgramId};
use hookswap_domain::value_objects::BasisPoints;
use serde::{Deserialize, Serialize};

/// Configuration and live state of one constant-product pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Opaque discriminator chosen at creation; part of the pool identity.
    pub seed: u64,
    /// Principal allowed to lock/unlock, collect fees and update config.
    /// When absent those operations are permanently disabled.
    pub authority: Option<AccountId>,
    pub mint_x: MintId,
    pub mint_y: MintId,
    /// Vault balance of the X side, in base units.
    pub reserve_x: u64,
    /// Vault balance of the Y side, in base units.
    pub reserve_y: u64,
    /// Total outstanding LP shares.
    pub lp_supply: u64,
    /// Swap fee charged by the pool itself.
    pub fee: BasisPoints,
    /// When true, Deposit/Withdraw/Swap are rejected.
    pub locked: bool,
    /// Principal receiving collected Token-2022 transfer fees.
    pub fee_destination: AccountId,
    /// Default transfer-fee parameters applied to newly configured hook
    /// tokens; enforced by the external token layer.
    pub default_transfer_fee: TransferFeeParams,
    /// Hook controller approved for this pool's tokens.
    pub hook_program: Option<ProgramId>,
    /// Hook controllers the pool accepts; anything else is rejected.
    pub approved_hook_programs: Vec<ProgramId>,
    pub supports_transfer_fees: bool,
    pub supports_transfer_hooks: bool,
    pub supports_metadata: bool,
    pub supports_interest_bearing: bool,
}

impl PoolConfig {
    /// Which side of the pair a mint belongs to.
    pub fn side_of(&self, mint: &MintId) -> Result<PoolSide, AmmError> {
        if *mint == self.mint_x {
            Ok(PoolSide::X)
        } else if *mint == self.mint_y {
            Ok(PoolSide::Y)
        } else {
            Err(AmmError::InvalidToken)
        }
    }

    pub fn mint_of(&self, side: PoolSide) -> &MintId {
        match side {
            PoolSide::X => &self.mint_x,
            PoolSide::Y => &self.mint_y,
        }
    }

    pub fn reserve(&self, side: PoolSide) -> u64 {
        match side {
            PoolSide::X => self.reserve_x,
            PoolSide::Y => self.reserve_y,
        }
    }

    /// Adds `amount` to one reserve.
    pub fn credit(&mut self, side: PoolSide, amount: u64) -> Result<(), AmmError> {
        let reserve = match side {
            PoolSide::X => &mut self.reserve_x,
            PoolSide::Y => &mut self.reserve_y,
        };
        *reserve = reserve.checked_add(amount).ok_or(AmmError::Overflow)?;
        Ok(())
    }

    /// Removes `amount` from one reserve.
    pub fn debit(&mut self, side: PoolSide, amount: u64) -> Result<(), AmmError> {
        let reserve = match side {
            PoolSide::X => &mut self.reserve_x,
            PoolSide::Y => &mut self.reserve_y,
        };
        *reserve = reserve.checked_sub(amount).ok_or(AmmError::Underflow)?;
        Ok(())
    }

    pub fn mint_lp(&mut self, amount: u64) -> Result<(), AmmError> {
        self.lp_supply = self
            .lp_supply
            .checked_add(amount)
            .ok_or(AmmError::Overflow)?;
        Ok(())
    }

    pub fn burn_lp(&mut self, amount: u64) -> Result<(), AmmError> {
        self.lp_supply = self
            .lp_supply
            .checked_sub(amount)
            .ok_or(AmmError::Underflow)?;
        Ok(())
    }

    pub fn require_unlocked(&self) -> Result<(), AmmError> {
        if self.locked {
            return Err(AmmError::PoolLocked);
        }
        Ok(())
    }

    /// Checks that `caller` is the configured authority.
    pub fn require_authority(&self, caller: &AccountId) -> Result<(), AmmError> {
        match &self.authority {
            None => Err(AmmError::NoAuthoritySet),
            Some(authority) if authority == caller => Ok(()),
            Some(_) => Err(AmmError::InvalidAuthority),
        }
    }

    /// Checks that the pool's mints carry the given extension.
    pub fn require_extension(&self, extension: TokenExtension) -> Result<(), AmmError> {
        let supported = match extension {
            TokenExtension::TransferFee => self.supports_transfer_fees,
            TokenExtension::TransferHook => self.supports_transfer_hooks,
            TokenExtension::Metadata => self.supports_metadata,
            TokenExtension::InterestBearing => self.supports_interest_bearing,
        };
        if !supported {
            return Err(match extension {
                TokenExtension::TransferFee => AmmError::TransferFeeNotFound,
                TokenExtension::TransferHook => AmmError::TransferHookNotFound,
                _ => AmmError::UnsupportedExtension,
            });
        }
        Ok(())
    }

    pub fn is_hook_approved(&self, program: &ProgramId) -> bool {
        self.approved_hook_programs.contains(program)
    }

    pub fn require_approved_hook(&self, program: &ProgramId) -> Result<(), AmmError> {
        if !self.is_hook_approved(program) {
            return Err(AmmError::UnsupportedHookProgram);
        }
        Ok(())
    }

    /// `lp_supply == 0` iff both reserves are zero.
    pub fn reserves_consistent(&self) -> bool {
        (self.lp_supply == 0) == (self.reserve_x == 0 && self.reserve_y == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::initialize::{InitializeParams, initialize};
    use hookswap_domain::token::Token;

    fn test_pool() -> PoolConfig {
        initialize(InitializeParams {
            seed: 1,
            fee_bps: 30,
            authority: Some(AccountId::new("authority")),
            token_x: Token::new(MintId::new("mint-x"), "X", 9, "Token X"),
            token_y: Token::new(MintId::new("mint-y"), "Y", 9, "Token Y"),
            fee_destination: AccountId::new("fee-dest"),
            transfer_fee_basis_points: 10,
            max_transfer_fee: 100_000_000,
            hook_program: None,
        })
        .unwrap()
        .config
    }

    #[test]
    fn test_credit_debit() {
        let mut pool = test_pool();
        pool.credit(PoolSide::X, 500).unwrap();
        assert_eq!(pool.reserve_x, 500);
        pool.debit(PoolSide::X, 200).unwrap();
        assert_eq!(pool.reserve_x, 300);
        assert_eq!(pool.debit(PoolSide::X, 301), Err(AmmError::Underflow));
        assert_eq!(pool.credit(PoolSide::Y, u64::MAX), Ok(()));
        assert_eq!(pool.credit(PoolSide::Y, 1), Err(AmmError::Overflow));
    }

    #[test]
    fn test_lp_supply_mutation() {
        let mut pool = test_pool();
        pool.mint_lp(1000).unwrap();
        assert_eq!(pool.lp_supply, 1000);
        assert_eq!(pool.burn_lp(1001), Err(AmmError::Underflow));
        pool.burn_lp(1000).unwrap();
        assert_eq!(pool.lp_supply, 0);
    }

    #[test]
    fn test_authority_checks() {
        let mut pool = test_pool();
        pool.require_authority(&AccountId::new("authority")).unwrap();
        assert_eq!(
            pool.require_authority(&AccountId::new("stranger")),
            Err(AmmError::InvalidAuthority)
        );
        pool.authority = None;
        assert_eq!(
            pool.require_authority(&AccountId::new("authority")),
            Err(AmmError::NoAuthoritySet)
        );
    }

    #[test]
    fn test_side_resolution() {
        let pool = test_pool();
        assert_eq!(pool.side_of(&MintId::new("mint-x")).unwrap(), PoolSide::X);
        assert_eq!(pool.side_of(&MintId::new("mint-y")).unwrap(), PoolSide::Y);
        assert_eq!(
            pool.side_of(&MintId::new("other")),
            Err(AmmError::InvalidToken)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let pool = test_pool();
        let json = serde_json::to_string(&pool).unwrap();
        let back: PoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
    }
}
