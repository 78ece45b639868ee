use anchor_lang::prelude::*;

use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::ThroneError;

/// Integer percentage of `amount`, rounding down.
pub fn percentage_of(amount: u64, pct: u64) -> Result<u64> {
    amount
        .checked_mul(pct)
        .and_then(|v| v.checked_div(PERCENT_DENOMINATOR))
        .ok_or_else(|| ThroneError::Overflow.into())
}

/// Next claim fee after a successful claim: fee * (100 + increase_pct) / 100,
/// rounding down. The fee never decreases within a round.
pub fn escalate_fee(fee: u64, increase_pct: u64) -> Result<u64> {
    fee.checked_mul(
        PERCENT_DENOMINATOR
            .checked_add(increase_pct)
            .ok_or(ThroneError::Overflow)?,
    )
    .and_then(|v| v.checked_div(PERCENT_DENOMINATOR))
    .ok_or_else(|| ThroneError::Overflow.into())
}
