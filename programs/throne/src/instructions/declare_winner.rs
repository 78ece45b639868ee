use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::GameEnded;
use crate::state::{Game, GameConfig, PlayerRecord};

#[derive(Accounts)]
pub struct DeclareWinner<'info> {
    /// Anyone may settle an expired round
    pub caller: Signer<'info>,

    #[account(
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

    /// The sitting king's ledger, credited with the prize
    #[account(mut)]
    pub winner_record: Account<'info, PlayerRecord>,
}

pub fn handler(ctx: Context<DeclareWinner>) -> Result<()> {
    let clock = Clock::get()?;

    let settlement = ctx
        .accounts
        .game
        .settle_winner(&ctx.accounts.game_config, clock.unix_timestamp)?;

    require!(
        ctx.accounts.winner_record.player == settlement.winner,
        ThroneError::InvalidWinner
    );
    ctx.accounts.winner_record.credit(settlement.prize)?;

    emit!(GameEnded {
        winner: settlement.winner,
        prize: settlement.prize,
        timestamp: clock.unix_timestamp,
        round: settlement.round,
    });

    msg!(
        "Round {} ended: {} wins {} lamports (platform cut {})",
        settlement.round,
        settlement.winner,
        settlement.prize,
        settlement.platform_cut
    );
    Ok(())
}
