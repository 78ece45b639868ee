use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::state::GameConfig;
use crate::utils::{escalate_fee, percentage_of};

#[account]
#[derive(InitSpace)]
pub struct Game {
    /// Current king's wallet (meaningless while `has_king` is false)
    pub current_king: Pubkey,
    /// Whether a king holds the throne (Pubkey has no natural null)
    pub has_king: bool,
    /// Accumulated prize balance, held in the vault
    pub pot: u64,
    /// Payment required to take the throne right now
    pub claim_fee: u64,
    /// Unix timestamp after which the king can be declared winner
    pub deadline: i64,
    /// True between a winner declaration and the next claim
    pub game_ended: bool,
    /// Round counter, incremented when a winner is declared
    pub round: u64,
    /// Successful claims across all rounds
    pub total_claims: u64,
    /// Platform cut accrued in the vault, withdrawable by the authority
    pub platform_fees_accrued: u64,
    pub bump: u8,
}

/// Result of a successful claim, consumed by the instruction handler
/// to move lamports and credit the dethroned king's ledger.
#[derive(Debug)]
pub struct ClaimOutcome {
    /// Lamports actually pulled from the claimer
    pub retained: u64,
    /// Dethroned king, if the throne was occupied
    pub previous_king: Option<Pubkey>,
    /// Kickback credited to the dethroned king's pending balance
    pub previous_king_cut: u64,
}

/// Result of declaring a winner.
#[derive(Debug)]
pub struct Settlement {
    pub winner: Pubkey,
    pub prize: u64,
    pub platform_cut: u64,
    /// The round that just ended
    pub round: u64,
}

impl Game {
    pub const SEED: &'static [u8] = b"game";

    /// Apply a throne claim to the state machine.
    ///
    /// Validates payment and self-reclaim, splits the retained payment
    /// between the dethroned king and the pot, escalates the claim fee
    /// and restarts the grace-period deadline. If the previous round had
    /// ended, this claim opens the next round.
    pub fn apply_claim(
        &mut self,
        claimer: Pubkey,
        payment: u64,
        config: &GameConfig,
        now: i64,
    ) -> Result<ClaimOutcome> {
        require!(payment >= self.claim_fee, ThroneError::InsufficientPayment);
        // has_king is cleared on settlement, so this only bites mid-round
        require!(
            !(self.has_king && self.current_king == claimer),
            ThroneError::AlreadyKing
        );

        let retained = if config.retain_excess {
            payment
        } else {
            self.claim_fee
        };

        if self.game_ended {
            // First claim of a new round. The fee was already reset to the
            // configured initial fee when the previous round settled.
            self.game_ended = false;
        }

        let previous_king = self.has_king.then_some(self.current_king);
        let previous_king_cut = match previous_king {
            Some(_) => percentage_of(retained, config.previous_king_payout_percentage)?,
            None => 0,
        };
        let pot_contribution = retained
            .checked_sub(previous_king_cut)
            .ok_or(ThroneError::Overflow)?;

        self.pot = self
            .pot
            .checked_add(pot_contribution)
            .ok_or(ThroneError::Overflow)?;
        self.current_king = claimer;
        self.has_king = true;
        self.total_claims = self
            .total_claims
            .checked_add(1)
            .ok_or(ThroneError::Overflow)?;
        self.claim_fee = escalate_fee(self.claim_fee, config.fee_increase_percentage)?;
        self.deadline = now
            .checked_add(config.grace_period)
            .ok_or(ThroneError::Overflow)?;

        Ok(ClaimOutcome {
            retained,
            previous_king,
            previous_king_cut,
        })
    }

    /// Declare the sitting king the winner once the grace period has elapsed.
    ///
    /// Zeroes the pot, accrues the platform cut, clears the throne and
    /// resets the claim fee for the next round.
    pub fn settle_winner(&mut self, config: &GameConfig, now: i64) -> Result<Settlement> {
        // The ended check comes first: after settlement the throne is also
        // vacant, and a double declare must surface as GameAlreadyEnded.
        require!(!self.game_ended, ThroneError::GameAlreadyEnded);
        require!(self.has_king, ThroneError::NoKing);
        require!(now >= self.deadline, ThroneError::GracePeriodNotElapsed);

        let platform_cut = percentage_of(self.pot, config.platform_fee_percentage)?;
        let prize = self
            .pot
            .checked_sub(platform_cut)
            .ok_or(ThroneError::Overflow)?;

        let settlement = Settlement {
            winner: self.current_king,
            prize,
            platform_cut,
            round: self.round,
        };

        self.platform_fees_accrued = self
            .platform_fees_accrued
            .checked_add(platform_cut)
            .ok_or(ThroneError::Overflow)?;
        self.pot = 0;
        self.game_ended = true;
        self.has_king = false;
        self.current_king = Pubkey::default();
        self.claim_fee = config.initial_claim_fee;
        self.round = self.round.checked_add(1).ok_or(ThroneError::Overflow)?;

        Ok(settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LAMPORTS_PER_SOL;

    const GRACE: i64 = 86_400;

    fn test_config() -> GameConfig {
        GameConfig {
            authority: Pubkey::new_unique(),
            initial_claim_fee: LAMPORTS_PER_SOL / 10, // 0.1 SOL
            grace_period: GRACE,
            fee_increase_percentage: 10,
            platform_fee_percentage: 5,
            previous_king_payout_percentage: 10,
            retain_excess: false,
            vault: Pubkey::new_unique(),
            bump: 255,
        }
    }

    fn new_game(config: &GameConfig) -> Game {
        Game {
            current_king: Pubkey::default(),
            has_king: false,
            pot: 0,
            claim_fee: config.initial_claim_fee,
            deadline: 0,
            game_ended: false,
            round: 1,
            total_claims: 0,
            platform_fees_accrued: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_first_claim_takes_throne() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        let outcome = game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();

        assert_eq!(outcome.retained, 100_000_000);
        assert!(outcome.previous_king.is_none());
        assert_eq!(outcome.previous_king_cut, 0);
        assert!(game.has_king);
        assert_eq!(game.current_king, p1);
        assert_eq!(game.pot, 100_000_000);
        assert_eq!(game.claim_fee, 110_000_000);
        assert_eq!(game.deadline, 1_000 + GRACE);
        assert_eq!(game.total_claims, 1);
    }

    #[test]
    fn test_insufficient_payment_rejected() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        let err = game
            .apply_claim(p1, 99_999_999, &config, 1_000)
            .unwrap_err();
        assert_eq!(err, ThroneError::InsufficientPayment.into());
        // nothing mutated
        assert!(!game.has_king);
        assert_eq!(game.pot, 0);
        assert_eq!(game.total_claims, 0);
    }

    #[test]
    fn test_king_cannot_reclaim() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        let err = game
            .apply_claim(p1, 110_000_000, &config, 1_100)
            .unwrap_err();
        assert_eq!(err, ThroneError::AlreadyKing.into());
        assert_eq!(game.total_claims, 1);
    }

    #[test]
    fn test_dethrone_pays_previous_king() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();
        let p2 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        let outcome = game.apply_claim(p2, 110_000_000, &config, 1_100).unwrap();

        assert_eq!(outcome.previous_king, Some(p1));
        // 10% of 0.11 SOL
        assert_eq!(outcome.previous_king_cut, 11_000_000);
        // 0.1 + (0.11 - 0.011)
        assert_eq!(game.pot, 199_000_000);
        assert_eq!(game.claim_fee, 121_000_000);
        assert_eq!(game.current_king, p2);
        assert_eq!(game.total_claims, 2);
        // deadline restarted from the second claim
        assert_eq!(game.deadline, 1_100 + GRACE);
    }

    #[test]
    fn test_excess_payment_ignored_by_default() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        let outcome = game
            .apply_claim(p1, 5 * LAMPORTS_PER_SOL, &config, 1_000)
            .unwrap();
        // only the exact fee is pulled
        assert_eq!(outcome.retained, 100_000_000);
        assert_eq!(game.pot, 100_000_000);
    }

    #[test]
    fn test_excess_payment_retained_when_configured() {
        let mut config = test_config();
        config.retain_excess = true;
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        let outcome = game.apply_claim(p1, 150_000_000, &config, 1_000).unwrap();
        assert_eq!(outcome.retained, 150_000_000);
        assert_eq!(game.pot, 150_000_000);
    }

    #[test]
    fn test_settle_before_deadline_rejected() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        let err = game
            .settle_winner(&config, 1_000 + GRACE - 1)
            .unwrap_err();
        assert_eq!(err, ThroneError::GracePeriodNotElapsed.into());
        assert_eq!(game.pot, 100_000_000);
        assert!(!game.game_ended);
    }

    #[test]
    fn test_settle_without_king_rejected() {
        let config = test_config();
        let mut game = new_game(&config);

        let err = game.settle_winner(&config, i64::MAX).unwrap_err();
        assert_eq!(err, ThroneError::NoKing.into());
    }

    #[test]
    fn test_settle_at_deadline_pays_winner() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();
        let p2 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        game.apply_claim(p2, 110_000_000, &config, 1_100).unwrap();

        let settlement = game.settle_winner(&config, 1_100 + GRACE).unwrap();

        // spec worked example: pot 0.199, platform cut 5% = 0.00995
        assert_eq!(settlement.winner, p2);
        assert_eq!(settlement.platform_cut, 9_950_000);
        assert_eq!(settlement.prize, 189_050_000);
        assert_eq!(settlement.round, 1);

        assert_eq!(game.pot, 0);
        assert!(game.game_ended);
        assert!(!game.has_king);
        assert_eq!(game.round, 2);
        assert_eq!(game.platform_fees_accrued, 9_950_000);
        // fee reset for the next round
        assert_eq!(game.claim_fee, config.initial_claim_fee);
    }

    #[test]
    fn test_double_settle_rejected() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        game.settle_winner(&config, 1_000 + GRACE).unwrap();
        let err = game.settle_winner(&config, 1_000 + GRACE + 1).unwrap_err();
        assert_eq!(err, ThroneError::GameAlreadyEnded.into());
    }

    #[test]
    fn test_new_round_starts_on_claim_after_end() {
        let config = test_config();
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        game.settle_winner(&config, 1_000 + GRACE).unwrap();

        // the previous winner may open the next round: the throne is vacant
        let now = 1_000 + GRACE + 50;
        let outcome = game
            .apply_claim(p1, config.initial_claim_fee, &config, now)
            .unwrap();

        assert!(outcome.previous_king.is_none());
        assert!(!game.game_ended);
        assert_eq!(game.round, 2);
        assert_eq!(game.pot, config.initial_claim_fee);
        assert_eq!(game.claim_fee, 110_000_000);
        assert_eq!(game.deadline, now + GRACE);
        assert_eq!(game.total_claims, 2);
    }

    #[test]
    fn test_fee_escalates_per_claim_not_per_player() {
        let config = test_config();
        let mut game = new_game(&config);
        let players: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

        let mut expected_fee = config.initial_claim_fee;
        for (i, p) in players.iter().enumerate() {
            assert_eq!(game.claim_fee, expected_fee);
            game.apply_claim(*p, expected_fee, &config, 1_000 + i as i64)
                .unwrap();
            expected_fee = expected_fee * 110 / 100;
        }
        assert_eq!(game.total_claims, 4);
    }

    #[test]
    fn test_zero_platform_fee_pays_full_pot() {
        let mut config = test_config();
        config.platform_fee_percentage = 0;
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        let settlement = game.settle_winner(&config, 1_000 + GRACE).unwrap();
        assert_eq!(settlement.prize, 100_000_000);
        assert_eq!(settlement.platform_cut, 0);
        assert_eq!(game.platform_fees_accrued, 0);
    }

    #[test]
    fn test_zero_payout_percentage_keeps_everything_in_pot() {
        let mut config = test_config();
        config.previous_king_payout_percentage = 0;
        let mut game = new_game(&config);
        let p1 = Pubkey::new_unique();
        let p2 = Pubkey::new_unique();

        game.apply_claim(p1, 100_000_000, &config, 1_000).unwrap();
        let outcome = game.apply_claim(p2, 110_000_000, &config, 1_100).unwrap();
        assert_eq!(outcome.previous_king, Some(p1));
        assert_eq!(outcome.previous_king_cut, 0);
        assert_eq!(game.pot, 210_000_000);
    }
}
