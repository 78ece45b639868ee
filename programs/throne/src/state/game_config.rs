use anchor_lang::prelude::*;

use crate::constants::{MAX_PERCENTAGE, MAX_PREVIOUS_KING_PAYOUT_PERCENTAGE};
use crate::errors::ThroneError;

pub const VAULT_SEED: &[u8] = b"vault";

#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    pub authority: Pubkey,
    /// Claim fee at the start of every round
    pub initial_claim_fee: u64,
    /// Seconds a king must survive undisturbed to win
    pub grace_period: i64,
    /// Applied multiplicatively to the claim fee after each claim
    pub fee_increase_percentage: u64,
    /// Taken from the pot when a winner is declared
    pub platform_fee_percentage: u64,
    /// Share of each claim payment kicked back to the dethroned king (0-50)
    pub previous_king_payout_percentage: u64,
    /// Whether payment above the exact claim fee is kept in the pot.
    /// When false, only the exact fee is pulled from the claimer.
    pub retain_excess: bool,
    /// Vault PDA holding the pot, pending winnings and accrued platform fees
    pub vault: Pubkey,
    pub bump: u8,
}

impl GameConfig {
    pub const SEED: &'static [u8] = b"game_config";

    pub fn validate_grace_period(grace_period: i64) -> Result<()> {
        require!(grace_period > 0, ThroneError::InvalidGracePeriod);
        Ok(())
    }

    pub fn validate_claim_fee(fee: u64) -> Result<()> {
        require!(fee > 0, ThroneError::InvalidClaimFee);
        Ok(())
    }

    pub fn validate_percentage(pct: u64) -> Result<()> {
        require!(pct <= MAX_PERCENTAGE, ThroneError::InvalidPercentage);
        Ok(())
    }

    pub fn validate_payout_percentage(pct: u64) -> Result<()> {
        require!(
            pct <= MAX_PREVIOUS_KING_PAYOUT_PERCENTAGE,
            ThroneError::InvalidPercentage
        );
        Ok(())
    }
}
