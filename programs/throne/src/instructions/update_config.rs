use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::state::{Game, GameConfig};

/// Shared context for the post-game parameter updates. All of them are
/// authority-gated and only permitted between rounds (`game_ended`).
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = authority.key() == game_config.authority @ ThroneError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = game_config.bump
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [Game::SEED],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,
}

fn require_game_ended(game: &Game) -> Result<()> {
    require!(game.game_ended, ThroneError::GameStillActive);
    Ok(())
}

pub fn update_grace_period(ctx: Context<UpdateConfig>, grace_period: i64) -> Result<()> {
    require_game_ended(&ctx.accounts.game)?;
    GameConfig::validate_grace_period(grace_period)?;

    ctx.accounts.game_config.grace_period = grace_period;
    msg!("Updated grace_period to {}s", grace_period);
    Ok(())
}

pub fn update_platform_fee_percentage(ctx: Context<UpdateConfig>, percentage: u64) -> Result<()> {
    require_game_ended(&ctx.accounts.game)?;
    GameConfig::validate_percentage(percentage)?;

    ctx.accounts.game_config.platform_fee_percentage = percentage;
    msg!("Updated platform_fee_percentage to {}%", percentage);
    Ok(())
}

pub fn update_claim_fee_parameters(
    ctx: Context<UpdateConfig>,
    initial_fee: u64,
    increase_percentage: u64,
) -> Result<()> {
    require_game_ended(&ctx.accounts.game)?;
    GameConfig::validate_claim_fee(initial_fee)?;
    GameConfig::validate_percentage(increase_percentage)?;

    let config = &mut ctx.accounts.game_config;
    config.initial_claim_fee = initial_fee;
    config.fee_increase_percentage = increase_percentage;

    // The game is between rounds, so re-seed the fee the next round opens at
    ctx.accounts.game.claim_fee = initial_fee;

    msg!(
        "Updated claim fee parameters: initial {} lamports, increase {}%",
        initial_fee,
        increase_percentage
    );
    Ok(())
}

pub fn update_previous_king_payout_percentage(
    ctx: Context<UpdateConfig>,
    percentage: u64,
) -> Result<()> {
    require_game_ended(&ctx.accounts.game)?;
    GameConfig::validate_payout_percentage(percentage)?;

    ctx.accounts.game_config.previous_king_payout_percentage = percentage;
    msg!("Updated previous_king_payout_percentage to {}%", percentage);
    Ok(())
}
