/// turn policy: does this player claim the drawn barrel is on their card?
pub trait Claim {
    fn claims(&mut self, barrel: Barrel, found: bool) -> bool;
}

/// what a single turn did to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Struck,
    Passed,
    Eliminated,
}

/// A seat at the table: a name, an owned card, and a live/out flag.
/// Humans and computers differ only in the boxed claim policy.
pub struct Player {
    name: String,
    card: Card,
    active: bool,
    claim: Box<dyn Claim>,
}

impl Player {
    pub fn human(index: usize, card: Card, prompt: Box<dyn Prompt>) -> Self {
        Self {
            name: format!("Human_{}", index),
            card,
            active: true,
            claim: Box::new(Human::new(prompt)),
        }
    }
    pub fn robot(index: usize, card: Card) -> Self {
        Self {
            name: format!("Computer_{}", index),
            card,
            active: true,
            claim: Box::new(Robot),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn active(&self) -> bool {
        self.active
    }
    pub fn card(&self) -> &Card {
        &self.card
    }
    pub fn remaining(&self) -> usize {
        self.card.remaining()
    }

    /// resolve one turn against the drawn barrel.
    /// the honesty rule: a claim that disagrees with the card, either way,
    /// eliminates the player. eliminated seats keep their place in the
    /// list but never act again.
    pub fn turn(&mut self, barrel: Barrel) -> Outcome {
        let found = self.card.find(barrel);
        let claim = self.claim.claims(barrel, found.is_some());
        match (found, claim) {
            (Some((line, column)), true) => {
                self.card.strike(line, column);
                Outcome::Struck
            }
            (None, false) => Outcome::Passed,
            _ => {
                self.active = false;
                Outcome::Eliminated
            }
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({}, {} left)", self.name, self.card.remaining())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "{}'s card:", self.name)?;
        write!(f, "{}", self.card)?;
        write!(f, "{}", "-".repeat(50))
    }
}

use super::human::Human;
use super::prompt::Prompt;
use super::robot::Robot;
use crate::cards::{Barrel, Card};
