use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::ThroneClaimed;
use crate::state::{Game, GameConfig, PlayerRecord, VAULT_SEED};

#[derive(Accounts)]
pub struct ClaimThrone<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

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

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
        constraint = vault.key() == game_config.vault @ ThroneError::Unauthorized
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerRecord::INIT_SPACE,
        seeds = [PlayerRecord::SEED, player.key().as_ref()],
        bump
    )]
    pub player_record: Account<'info, PlayerRecord>,

    /// Dethroned king's ledger; required whenever the throne is occupied.
    #[account(mut)]
    pub previous_king_record: Option<Account<'info, PlayerRecord>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimThrone>, payment: u64) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();

    let outcome = ctx.accounts.game.apply_claim(
        player,
        payment,
        &ctx.accounts.game_config,
        clock.unix_timestamp,
    )?;

    // Pull the retained amount into the vault. The claimer signed, so this
    // is a plain system transfer.
    let transfer = anchor_lang::system_program::Transfer {
        from: ctx.accounts.player.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
    };
    anchor_lang::system_program::transfer(
        CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer),
        outcome.retained,
    )?;

    // Credit the dethroned king's pending balance. Never a push transfer:
    // the lamports stay in the vault until the king withdraws.
    if let Some(previous_king) = outcome.previous_king {
        let record = ctx
            .accounts
            .previous_king_record
            .as_mut()
            .ok_or(ThroneError::InvalidPreviousKing)?;
        require!(
            record.player == previous_king,
            ThroneError::InvalidPreviousKing
        );
        if outcome.previous_king_cut > 0 {
            record.credit(outcome.previous_king_cut)?;
        }
    }

    let record = &mut ctx.accounts.player_record;
    if record.player == Pubkey::default() {
        record.player = player;
        record.bump = ctx.bumps.player_record;
    }
    record.claim_count = record
        .claim_count
        .checked_add(1)
        .ok_or(ThroneError::Overflow)?;

    let game = &ctx.accounts.game;
    emit!(ThroneClaimed {
        king: player,
        paid: outcome.retained,
        new_claim_fee: game.claim_fee,
        pot: game.pot,
        round: game.round,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "{} took the throne for {} lamports (pot {}, next fee {}, round {})",
        player,
        outcome.retained,
        game.pot,
        game.claim_fee,
        game.round
    );
    Ok(())
}
