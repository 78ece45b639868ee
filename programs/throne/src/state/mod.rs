pub mod game;
pub mod game_config;
pub mod player_record;

pub use game::*;
pub use game_config::*;
pub use player_record::*;
