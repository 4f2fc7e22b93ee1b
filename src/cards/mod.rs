pub mod card;
pub use card::*;

pub mod cell;
pub use cell::*;

pub mod pool;
pub use pool::*;

/// a lottery number drawn from the bag, 1..=90
pub type Barrel = u8;

pub const LINES: usize = 3;
pub const COLUMNS: usize = 9;
pub const NUMBERS_PER_LINE: usize = 5;
pub const NUMBERS_PER_CARD: usize = LINES * NUMBERS_PER_LINE;
