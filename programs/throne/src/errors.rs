use anchor_lang::prelude::*;

#[error_code]
pub enum ThroneError {
    #[msg("Grace period must be greater than zero")]
    InvalidGracePeriod,

    #[msg("Percentage out of range")]
    InvalidPercentage,

    #[msg("Claim fee must be greater than zero")]
    InvalidClaimFee,

    #[msg("Payment is below the current claim fee")]
    InsufficientPayment,

    #[msg("Caller is already the current king")]
    AlreadyKing,

    #[msg("Grace period has not elapsed")]
    GracePeriodNotElapsed,

    #[msg("Game has already ended")]
    GameAlreadyEnded,

    #[msg("Game is still active")]
    GameStillActive,

    #[msg("No king to declare as winner")]
    NoKing,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Previous king record does not match the current king")]
    InvalidPreviousKing,

    #[msg("Winner record does not match the current king")]
    InvalidWinner,

    #[msg("Vault has insufficient balance for payout")]
    InsufficientVaultBalance,

    #[msg("Arithmetic overflow")]
    Overflow,
}
