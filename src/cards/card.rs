/// A 3x9 Loto card. Each line carries 5 numbers across 9 columns, sorted
/// ascending by column; 15 distinct numbers per card. Numbers get struck
/// as their barrels are drawn, counting down a live remaining total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    lines: [[Cell; COLUMNS]; LINES],
    remaining: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pool of {0} numbers cannot fill a card of 15")]
pub struct InsufficientPool(pub usize);

impl Card {
    /// deal a fresh card over the pool's value range.
    /// the pool is read, never consumed: every player deals independently
    /// and cards routinely share numbers.
    pub fn deal(pool: &[Barrel], rng: &mut impl Rng) -> Result<Self, InsufficientPool> {
        if pool.len() < NUMBERS_PER_CARD {
            return Err(InsufficientPool(pool.len()));
        }
        let mut numbers = index::sample(rng, pool.len(), NUMBERS_PER_CARD)
            .into_iter()
            .map(|i| pool[i])
            .collect::<Vec<Barrel>>();
        numbers.shuffle(rng);
        let mut lines = [[Cell::Blank; COLUMNS]; LINES];
        for (line, chunk) in lines.iter_mut().zip(numbers.chunks(NUMBERS_PER_LINE)) {
            Self::fill(line, chunk, rng);
        }
        Ok(Self {
            lines,
            remaining: NUMBERS_PER_CARD,
        })
    }

    /// place 5 sorted numbers into 5 of 9 columns.
    /// column choice is its own draw, independent of number choice; the
    /// smallest number lands in the smallest occupied column.
    fn fill(line: &mut [Cell; COLUMNS], numbers: &[Barrel], rng: &mut impl Rng) {
        let mut numbers = numbers.to_vec();
        numbers.sort_unstable();
        let mut columns = index::sample(rng, COLUMNS, NUMBERS_PER_LINE).into_vec();
        columns.sort_unstable();
        for (column, number) in columns.into_iter().zip(numbers) {
            line[column] = Cell::Number(number);
        }
    }

    /// locate an unstruck barrel, scanning lines top to bottom.
    /// struck and blank cells never match, so a number already struck
    /// reads as absent.
    pub fn find(&self, barrel: Barrel) -> Option<(usize, usize)> {
        self.lines.iter().enumerate().find_map(|(i, line)| {
            line.iter()
                .position(|cell| cell.holds(barrel))
                .map(|j| (i, j))
        })
    }

    /// spend a located cell
    pub fn strike(&mut self, line: usize, column: usize) {
        self.lines[line][column] = Cell::Struck;
        self.remaining -= 1;
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
    pub fn lines(&self) -> &[[Cell; COLUMNS]; LINES] {
        &self.lines
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines.iter() {
            for cell in line.iter() {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use super::cell::Cell;
use super::Barrel;
use super::{COLUMNS, LINES, NUMBERS_PER_CARD, NUMBERS_PER_LINE};
use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
