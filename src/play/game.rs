/// Game owns the bag of barrels and the ordered seats.
/// Humans seat first, then computers; the order never changes.
/// A Game is single use: one shuffle, one run through the bag.
#[derive(Debug)]
pub struct Game {
    pub pool: Pool,
    pub players: Vec<Player>,
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("at least 2 participants required, got {0}")]
    InsufficientParticipants(usize),
    #[error(transparent)]
    Deal(#[from] InsufficientPool),
}

impl Game {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(),
            players: Vec::new(),
        }
    }

    /// table minimum: any mix of humans and computers, two seats or more
    pub fn supported(humans: usize, robots: usize) -> bool {
        humans + robots >= MIN_PLAYERS
    }

    /// deal a card over the bag's value range.
    /// a read-only draw: the bag keeps all 90 barrels, and players
    /// dealt after this one may share numbers freely.
    pub fn deal(&self, rng: &mut impl Rng) -> Result<Card, InsufficientPool> {
        Card::deal(self.pool.barrels(), rng)
    }

    pub fn seat(&mut self, player: Player) {
        self.players.push(player);
    }
}

use super::MIN_PLAYERS;
use crate::cards::{Card, InsufficientPool, Pool};
use crate::players::Player;
use rand::Rng;
use thiserror::Error;
