pub struct Robot;

impl Claim for Robot {
    /// claims exactly what the card shows. never bluffs, never misses,
    /// so a robot is never eliminated.
    fn claims(&mut self, _: Barrel, found: bool) -> bool {
        found
    }
}

impl std::fmt::Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Computer")
    }
}

use super::player::Claim;
use crate::cards::Barrel;
