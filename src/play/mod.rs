pub mod conclusion;
pub use conclusion::*;

pub mod engine;
pub use engine::*;

pub mod game;
pub use game::*;

pub const MIN_PLAYERS: usize = 2;
