pub const MIN: Barrel = 1;
pub const MAX: Barrel = 90;

/// The bag of 90 barrels. Shuffled exactly once at game start, then
/// consumed front to back via ::flip(); no barrel repeats within a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    barrels: Vec<Barrel>,
    drawn: usize,
}

impl Pool {
    pub fn new() -> Self {
        Self {
            barrels: (MIN..=MAX).collect(),
            drawn: 0,
        }
    }

    /// the one-time shuffle before barrels start flipping
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.barrels.shuffle(rng);
    }

    /// draw the next barrel from the bag, or None once the bag is empty
    pub fn flip(&mut self) -> Option<Barrel> {
        let barrel = self.barrels.get(self.drawn).copied();
        if barrel.is_some() {
            self.drawn += 1;
        }
        barrel
    }

    /// the value range cards deal over. read-only: dealing a card does
    /// not take barrels out of the bag.
    pub fn barrels(&self) -> &[Barrel] {
        &self.barrels
    }

    pub fn size(&self) -> usize {
        self.barrels.len() - self.drawn
    }
}

use super::Barrel;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn ninety_distinct_barrels() {
        let pool = Pool::new();
        let mut barrels = pool.barrels().to_vec();
        barrels.sort_unstable();
        barrels.dedup();
        assert_eq!(barrels.len(), 90);
        assert_eq!(pool.size(), 90);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut pool = Pool::new();
        pool.shuffle(&mut rng);
        let mut barrels = pool.barrels().to_vec();
        barrels.sort_unstable();
        assert_eq!(barrels, (MIN..=MAX).collect::<Vec<Barrel>>());
    }

    #[test]
    fn flip_consumes_front_to_back() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut pool = Pool::new();
        pool.shuffle(&mut rng);
        let order = pool.barrels().to_vec();
        let mut flipped = Vec::new();
        while let Some(barrel) = pool.flip() {
            flipped.push(barrel);
        }
        assert_eq!(flipped, order);
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.flip(), None);
    }
}
