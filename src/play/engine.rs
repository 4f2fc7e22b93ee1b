/// Table drives the round loop: flip a barrel, give every live seat a
/// turn against it, stop the moment a card hits zero.
pub struct Table {
    game: Game,
    round: usize,
}

impl Table {
    /// seat the requested humans then computers, each with a freshly
    /// dealt card, and validate the table minimum before any of it.
    pub fn setup(humans: usize, robots: usize, rng: &mut impl Rng) -> Result<Self, SetupError> {
        if !Game::supported(humans, robots) {
            return Err(SetupError::InsufficientParticipants(humans + robots));
        }
        let mut game = Game::new();
        for index in 1..=humans {
            let card = game.deal(rng)?;
            game.seat(Player::human(index, card, Box::new(Console)));
        }
        for index in 1..=robots {
            let card = game.deal(rng)?;
            game.seat(Player::robot(index, card));
        }
        Ok(Self { game, round: 0 })
    }

    /// shuffle once, then flip barrels until someone clears a card or
    /// the bag runs dry.
    pub fn play(&mut self, rng: &mut impl Rng) -> Conclusion {
        self.game.pool.shuffle(rng);
        while let Some(barrel) = self.game.pool.flip() {
            self.round += 1;
            println!("Round: {}. Barrel: {}.", self.round, barrel);
            if let Some(winner) = self.turns(barrel) {
                return Conclusion::Winner(winner);
            }
        }
        log::info!("all 90 barrels drawn, nobody filled a card");
        Conclusion::Exhausted
    }

    /// one round: every live seat resolves the barrel in seat order.
    /// the first card to reach zero wins on the spot, before later seats
    /// get their turn, so ties cannot happen.
    fn turns(&mut self, barrel: Barrel) -> Option<String> {
        for player in self.game.players.iter_mut() {
            if !player.active() {
                continue;
            }
            println!("{}", player);
            match player.turn(barrel) {
                Outcome::Eliminated => println!("{} is out of the game!", player.name()),
                Outcome::Passed => println!("Next turn."),
                Outcome::Struck => {}
            }
            if player.remaining() == 0 {
                println!("{} is winner!", player.name());
                println!("{}", player);
                return Some(player.name().to_string());
            }
        }
        None
    }
}

use super::conclusion::Conclusion;
use super::game::{Game, SetupError};
use crate::cards::Barrel;
use crate::players::{Console, Outcome, Player};
use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Barrel, Card};
    use crate::players::Prompt;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    struct Script(Vec<&'static str>);

    impl Prompt for Script {
        fn ask(&mut self, _: &str) -> String {
            self.0.pop().expect("script exhausted").to_string()
        }
    }

    #[test]
    fn table_minimum_is_enforced() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            Table::setup(1, 0, &mut rng),
            Err(SetupError::InsufficientParticipants(1))
        ));
    }

    #[test]
    fn humans_seat_before_robots() {
        let mut rng = SmallRng::seed_from_u64(0);
        let table = Table::setup(2, 1, &mut rng).unwrap();
        let names = table
            .game
            .players
            .iter()
            .map(|p| p.name().to_string())
            .collect::<Vec<String>>();
        assert_eq!(names, vec!["Human_1", "Human_2", "Computer_1"]);
    }

    #[test]
    fn two_robots_race_to_a_winner() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut table = Table::setup(0, 2, &mut rng).unwrap();
        match table.play(&mut rng) {
            // with a full bag and no eliminations someone must clear
            Conclusion::Winner(name) => {
                let winner = table
                    .game
                    .players
                    .iter()
                    .find(|p| p.name() == name)
                    .unwrap();
                assert_eq!(winner.remaining(), 0);
                assert!(
                    winner
                        .card()
                        .lines()
                        .iter()
                        .flatten()
                        .all(|cell| !cell.is_number())
                );
                assert!(table.round <= 90);
                assert!(
                    table
                        .game
                        .players
                        .iter()
                        .filter(|p| p.name() != name)
                        .all(|p| p.remaining() > 0)
                );
            }
            Conclusion::Exhausted => panic!("robots cannot fail to clear a full bag"),
        }
    }

    #[test]
    fn eliminated_seats_are_skipped() {
        // one scripted answer only: the second round must not prompt
        let pool = (1..=15).collect::<Vec<Barrel>>();
        let mut rng = SmallRng::seed_from_u64(1);
        let card = Card::deal(&pool, &mut rng).unwrap();
        let mut game = Game::new();
        game.seat(Player::human(1, card, Box::new(Script(vec!["y"]))));
        let robot = game.deal(&mut rng).unwrap();
        game.seat(Player::robot(1, robot));
        let mut table = Table { game, round: 0 };
        assert_eq!(table.turns(90), None);
        assert!(!table.game.players[0].active());
        assert_eq!(table.turns(90), None);
        assert!(table.game.players[1].active());
    }
}
