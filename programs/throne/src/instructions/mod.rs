#![allow(ambiguous_glob_reexports)]

pub mod claim_throne;
pub mod declare_winner;
pub mod initialize;
pub mod update_config;
pub mod withdraw_platform_fees;
pub mod withdraw_winnings;

pub use claim_throne::*;
pub use declare_winner::*;
pub use initialize::*;
pub use update_config::*;
pub use withdraw_platform_fees::*;
pub use withdraw_winnings::*;
