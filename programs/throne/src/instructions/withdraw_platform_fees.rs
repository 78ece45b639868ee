use anchor_lang::prelude::*;

use crate::errors::ThroneError;
use crate::state::{Game, GameConfig, VAULT_SEED};

#[derive(Accounts)]
pub struct WithdrawPlatformFees<'info> {
    #[account(
        mut,
        constraint = authority.key() == game_config.authority @ ThroneError::Unauthorized
    )]
    pub authority: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawPlatformFees>) -> Result<()> {
    let amount = ctx.accounts.game.platform_fees_accrued;
    require!(amount > 0, ThroneError::NothingToWithdraw);
    require!(
        ctx.accounts.vault.lamports() >= amount,
        ThroneError::InsufficientVaultBalance
    );

    ctx.accounts.game.platform_fees_accrued = 0;

    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &[ctx.bumps.vault]];
    let transfer_ix = anchor_lang::solana_program::system_instruction::transfer(
        &ctx.accounts.vault.key(),
        &ctx.accounts.authority.key(),
        amount,
    );
    anchor_lang::solana_program::program::invoke_signed(
        &transfer_ix,
        &[
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[vault_seeds],
    )?;

    msg!("Platform fees withdrawn: {} lamports", amount);
    Ok(())
}
