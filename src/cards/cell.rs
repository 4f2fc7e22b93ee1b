/// one of the 9 positions in a card line.
/// struck cells are spent: they hold no number anymore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Number(Barrel),
    Struck,
}

impl Cell {
    pub fn holds(&self, barrel: Barrel) -> bool {
        matches!(self, Cell::Number(n) if *n == barrel)
    }
    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Blank => write!(f, "  "),
            Cell::Number(n) => write!(f, "{}", format!("{:>2}", n).green()),
            Cell::Struck => write!(f, "{}", "--".dimmed()),
        }
    }
}

use super::Barrel;
use colored::Colorize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_holds_its_value() {
        assert!(Cell::Number(42).holds(42));
        assert!(!Cell::Number(42).holds(24));
    }

    #[test]
    fn spent_cells_hold_nothing() {
        assert!(!Cell::Blank.holds(1));
        assert!(!Cell::Struck.holds(1));
    }
}
