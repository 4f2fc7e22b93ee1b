pub mod human;
pub use human::*;

pub mod player;
pub use player::*;

pub mod prompt;
pub use prompt::*;

pub mod robot;
pub use robot::*;
