mod game_entry;

pub use game_entry::{GameEntry, GameStatus};
