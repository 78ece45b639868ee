use anchor_lang::prelude::*;

use crate::state::{Game, GameConfig, VAULT_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GameConfig::SEED],
        bump
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + Game::INIT_SPACE,
        seeds = [Game::SEED],
        bump
    )]
    pub game: Account<'info, Game>,

    /// Vault PDA (owned by the System Program) holding all game lamports
    #[account(
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<Initialize>,
    initial_claim_fee: u64,
    grace_period: i64,
    fee_increase_percentage: u64,
    platform_fee_percentage: u64,
    previous_king_payout_percentage: u64,
    retain_excess: bool,
) -> Result<()> {
    GameConfig::validate_claim_fee(initial_claim_fee)?;
    GameConfig::validate_grace_period(grace_period)?;
    GameConfig::validate_percentage(fee_increase_percentage)?;
    GameConfig::validate_percentage(platform_fee_percentage)?;
    GameConfig::validate_payout_percentage(previous_king_payout_percentage)?;

    let config = &mut ctx.accounts.game_config;
    config.authority = ctx.accounts.authority.key();
    config.initial_claim_fee = initial_claim_fee;
    config.grace_period = grace_period;
    config.fee_increase_percentage = fee_increase_percentage;
    config.platform_fee_percentage = platform_fee_percentage;
    config.previous_king_payout_percentage = previous_king_payout_percentage;
    config.retain_excess = retain_excess;
    config.vault = ctx.accounts.vault.key();
    config.bump = ctx.bumps.game_config;

    let game = &mut ctx.accounts.game;
    game.current_king = Pubkey::default();
    game.has_king = false;
    game.pot = 0;
    game.claim_fee = initial_claim_fee;
    game.deadline = 0;
    game.game_ended = false;
    game.round = 1;
    game.total_claims = 0;
    game.platform_fees_accrued = 0;
    game.bump = ctx.bumps.game;

    msg!(
        "Throne initialized: fee {} lamports, grace period {}s, increase {}%, platform {}%, kickback {}%",
        initial_claim_fee,
        grace_period,
        fee_increase_percentage,
        platform_fee_percentage,
        previous_king_payout_percentage
    );
    Ok(())
}
