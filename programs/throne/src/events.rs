use anchor_lang::prelude::*;

#[event]
pub struct ThroneClaimed {
    pub king: Pubkey,
    pub paid: u64,
    pub new_claim_fee: u64,
    pub pot: u64,
    pub round: u64,
    pub timestamp: i64,
}

#[event]
pub struct GameEnded {
    pub winner: Pubkey,
    pub prize: u64,
    pub timestamp: i64,
    pub round: u64,
}

#[event]
pub struct WinningsWithdrawn {
    pub player: Pubkey,
    pub amount: u64,
}
