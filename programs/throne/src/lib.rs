use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Throne",
    project_url: "https://github.com/throne-game/throne",
    contacts: "email:security@throne.game",
    policy: "https://github.com/throne-game/throne/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/throne-game/throne"
}

#[program]
pub mod throne {
    use super::*;

    /// Create the game, its config and the lamport vault.
    pub fn initialize(
        ctx: Context<Initialize>,
        initial_claim_fee: u64,
        grace_period: i64,
        fee_increase_percentage: u64,
        platform_fee_percentage: u64,
        previous_king_payout_percentage: u64,
        retain_excess: bool,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            initial_claim_fee,
            grace_period,
            fee_increase_percentage,
            platform_fee_percentage,
            previous_king_payout_percentage,
            retain_excess,
        )
    }

    /// Pay the current claim fee to take the throne.
    pub fn claim_throne(ctx: Context<ClaimThrone>, payment: u64) -> Result<()> {
        instructions::claim_throne::handler(ctx, payment)
    }

    /// Settle the round once the grace period has elapsed. Anyone may call.
    pub fn declare_winner(ctx: Context<DeclareWinner>) -> Result<()> {
        instructions::declare_winner::handler(ctx)
    }

    /// Pull the caller's pending winnings out of the vault.
    pub fn withdraw_winnings(ctx: Context<WithdrawWinnings>) -> Result<()> {
        instructions::withdraw_winnings::handler(ctx)
    }

    /// Authority-only: collect the accrued platform cut.
    pub fn withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>) -> Result<()> {
        instructions::withdraw_platform_fees::handler(ctx)
    }

    pub fn update_grace_period(ctx: Context<UpdateConfig>, grace_period: i64) -> Result<()> {
        instructions::update_config::update_grace_period(ctx, grace_period)
    }

    pub fn update_platform_fee_percentage(
        ctx: Context<UpdateConfig>,
        percentage: u64,
    ) -> Result<()> {
        instructions::update_config::update_platform_fee_percentage(ctx, percentage)
    }

    pub fn update_claim_fee_parameters(
        ctx: Context<UpdateConfig>,
        initial_fee: u64,
        increase_percentage: u64,
    ) -> Result<()> {
        instructions::update_config::update_claim_fee_parameters(
            ctx,
            initial_fee,
            increase_percentage,
        )
    }

    pub fn update_previous_king_payout_percentage(
        ctx: Context<UpdateConfig>,
        percentage: u64,
    ) -> Result<()> {
        instructions::update_config::update_previous_king_payout_percentage(ctx, percentage)
    }
}
