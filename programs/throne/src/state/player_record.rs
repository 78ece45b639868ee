use anchor_lang::prelude::*;

/// Per-player ledger PDA, created lazily on the player's first claim.
///
/// Winnings are credited here rather than pushed to the wallet so a
/// recipient can never make a claim or settlement fail; an explicit
/// withdraw instruction moves the lamports out of the vault.
#[account]
#[derive(InitSpace)]
pub struct PlayerRecord {
    pub player: Pubkey,
    /// Number of successful claims this player has ever made
    pub claim_count: u64,
    /// Withdrawable balance held in the vault on this player's behalf
    pub pending_winnings: u64,
    pub bump: u8,
}

impl PlayerRecord {
    pub const SEED: &'static [u8] = b"player";

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.pending_winnings = self
            .pending_winnings
            .checked_add(amount)
            .ok_or(crate::errors::ThroneError::Overflow)?;
        Ok(())
    }
}
