use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::events::WinningsWithdrawn;
use crate::state::{GameConfig, PlayerRecord, VAULT_SEED};

#[derive(Accounts)]
pub struct WithdrawWinnings<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [GameConfig::SEED],
        bump = game_config.bump
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [PlayerRecord::SEED, player.key().as_ref()],
        bump = player_record.bump
    )]
    pub player_record: Account<'info, PlayerRecord>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
        constraint = vault.key() == game_config.vault @ ThroneError::Unauthorized
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawWinnings>) -> Result<()> {
    let amount = ctx.accounts.player_record.pending_winnings;
    require!(amount > 0, ThroneError::NothingToWithdraw);
    require!(
        ctx.accounts.vault.lamports() >= amount,
        ThroneError::InsufficientVaultBalance
    );

    // Clear the ledger before moving lamports
    ctx.accounts.player_record.pending_winnings = 0;

    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &[ctx.bumps.vault]];
    let transfer_ix = anchor_lang::solana_program::system_instruction::transfer(
        &ctx.accounts.vault.key(),
        &ctx.accounts.player.key(),
        amount,
    );
    anchor_lang::solana_program::program::invoke_signed(
        &transfer_ix,
        &[
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.player.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[vault_seeds],
    )?;

    emit!(WinningsWithdrawn {
        player: ctx.accounts.player.key(),
        amount,
    });

    msg!("{} withdrew {} lamports", ctx.accounts.player.key(), amount);
    Ok(())
}
