pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Percentages are whole integers out of 100.
pub const PERCENT_DENOMINATOR: u64 = 100;
pub const MAX_PERCENTAGE: u64 = 100;

/// The previous-king kickback is capped so the pot always grows on a claim.
pub const MAX_PREVIOUS_KING_PAYOUT_PERCENTAGE: u64 = 50;
