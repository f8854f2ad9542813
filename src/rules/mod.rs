//! Birth/survival rule engine
//!
//! - [`NeighborCounts`]: a set of neighbor counts in `0..=8`
//! - [`RuleSet`]: the survive and born sets, written `B36/S23`
//! - [`count_living_neighbors`]: Moore-neighborhood census over `current`
//!
//! Rules only ever look at [`Buffer::Current`], so evaluating cells in any
//! order gives the same generation.

use crate::grid::{Buffer, Cell, Grid};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest possible living-neighbor count
pub const MAX_NEIGHBORS: u8 = 8;

/// The 8 Moore-neighborhood offsets: N, S, E, W, then the diagonals
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// Errors produced while building or parsing a rule set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("neighbor count {0} is out of range (expected 0-8)")]
    CountOutOfRange(u8),

    #[error("invalid character '{ch}' in rule '{rule}'")]
    InvalidCharacter { ch: char, rule: String },

    #[error("rule '{0}' must look like B3/S23")]
    Malformed(String),
}

/// Set of living-neighbor counts, stored as a bitmask over `0..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborCounts(u16);

impl NeighborCounts {
    pub const fn empty() -> Self {
        NeighborCounts(0)
    }

    /// Build from a list of counts, rejecting anything above 8
    pub fn from_counts(counts: &[u8]) -> Result<Self, RuleError> {
        let mut set = NeighborCounts::empty();
        for &n in counts {
            if n > MAX_NEIGHBORS {
                return Err(RuleError::CountOutOfRange(n));
            }
            set.0 |= 1 << n;
        }
        Ok(set)
    }

    pub fn contains(self, n: u8) -> bool {
        n <= MAX_NEIGHBORS && self.0 & (1 << n) != 0
    }

    /// Counts in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.contains(n))
    }

    fn parse_digits(digits: &str, rule: &str) -> Result<Self, RuleError> {
        let mut counts = Vec::with_capacity(digits.len());
        for ch in digits.chars() {
            let n = ch.to_digit(10).ok_or_else(|| RuleError::InvalidCharacter {
                ch,
                rule: rule.to_string(),
            })?;
            counts.push(n as u8);
        }
        NeighborCounts::from_counts(&counts)
    }
}

impl fmt::Display for NeighborCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.iter() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

/// Survive and born conditions for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    survive: NeighborCounts,
    born: NeighborCounts,
}

impl RuleSet {
    pub fn new(survive: NeighborCounts, born: NeighborCounts) -> Self {
        RuleSet { survive, born }
    }

    /// Build from plain count lists
    pub fn from_counts(survive: &[u8], born: &[u8]) -> Result<Self, RuleError> {
        Ok(RuleSet::new(
            NeighborCounts::from_counts(survive)?,
            NeighborCounts::from_counts(born)?,
        ))
    }

    /// Classic Conway rules, `B3/S23`
    pub fn conway() -> Self {
        RuleSet {
            survive: NeighborCounts(1 << 2 | 1 << 3),
            born: NeighborCounts(1 << 3),
        }
    }

    /// A living cell with `n` living neighbors stays alive
    pub fn survives(&self, n: u8) -> bool {
        self.survive.contains(n)
    }

    /// A dead cell with `n` living neighbors comes alive
    pub fn is_born(&self, n: u8) -> bool {
        self.born.contains(n)
    }

    /// Apply the rules to one cell state and its neighbor count
    pub fn apply(&self, cell: Cell, living_neighbors: u8) -> Cell {
        match cell {
            Cell::Alive if self.survives(living_neighbors) => Cell::Alive,
            Cell::Dead if self.is_born(living_neighbors) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// State of `(x, y)` in the following generation, computed from `current` only
    pub fn next_state(&self, grid: &Grid, x: isize, y: isize) -> Cell {
        let cell = grid.read(Buffer::Current, x, y);
        self.apply(cell, count_living_neighbors(grid, x, y))
    }
}

/// The default rule set, `B36/S23`.
///
/// Note this is not classic Conway; see [`RuleSet::conway`] for `B3/S23`.
impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            survive: NeighborCounts(1 << 2 | 1 << 3),
            born: NeighborCounts(1 << 3 | 1 << 6),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.born, self.survive)
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse `B<digits>/S<digits>`, in either order and any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule = s.trim();
        let (first, second) = rule
            .split_once('/')
            .ok_or_else(|| RuleError::Malformed(rule.to_string()))?;

        let mut born = None;
        let mut survive = None;
        for part in [first, second] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut born,
                Some('S') => &mut survive,
                _ => return Err(RuleError::Malformed(rule.to_string())),
            };
            if slot.is_some() {
                return Err(RuleError::Malformed(rule.to_string()));
            }
            *slot = Some(NeighborCounts::parse_digits(chars.as_str(), rule)?);
        }

        match (survive, born) {
            (Some(survive), Some(born)) => Ok(RuleSet::new(survive, born)),
            _ => Err(RuleError::Malformed(rule.to_string())),
        }
    }
}

/// Count the living cells among the 8 neighbors of `(x, y)` in `current`.
///
/// Neighbors off the grid count as dead, including positions past the ends
/// of `isize`; the result is in `0..=8`.
pub fn count_living_neighbors(grid: &Grid, x: isize, y: isize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|(dx, dy)| Some((x.checked_add(*dx)?, y.checked_add(*dy)?)))
        .filter(|&(nx, ny)| grid.read(Buffer::Current, nx, ny).is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.to_string(), "B36/S23");
        assert!(rules.survives(2));
        assert!(rules.survives(3));
        assert!(!rules.survives(4));
        assert!(rules.is_born(3));
        assert!(rules.is_born(6));
        assert!(!rules.is_born(2));
    }

    #[test]
    fn test_conway_rules() {
        let rules = RuleSet::conway();
        assert_eq!(rules.to_string(), "B3/S23");
        assert!(!rules.is_born(6));
    }

    #[test]
    fn test_parse_rule_strings() {
        assert_eq!("B3/S23".parse::<RuleSet>().unwrap(), RuleSet::conway());
        assert_eq!("s23/b36".parse::<RuleSet>().unwrap(), RuleSet::default());
        assert_eq!(
            "B/S".parse::<RuleSet>().unwrap(),
            RuleSet::new(NeighborCounts::empty(), NeighborCounts::empty())
        );
    }

    #[test]
    fn test_parse_rejects_bad_rules() {
        assert_eq!(
            "B9/S23".parse::<RuleSet>(),
            Err(RuleError::CountOutOfRange(9))
        );
        assert!(matches!(
            "B3x/S23".parse::<RuleSet>(),
            Err(RuleError::InvalidCharacter { ch: 'x', .. })
        ));
        assert!(matches!(
            "B3S23".parse::<RuleSet>(),
            Err(RuleError::Malformed(_))
        ));
        assert!(matches!(
            "B3/B23".parse::<RuleSet>(),
            Err(RuleError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_counts_rejects_large_counts() {
        assert_eq!(
            RuleSet::from_counts(&[2, 3], &[12]),
            Err(RuleError::CountOutOfRange(12))
        );
    }

    #[test]
    fn test_count_living_neighbors_full_block() {
        let grid = Grid::from_rows(&["xxx", "xxx", "xxx"]);
        assert_eq!(count_living_neighbors(&grid, 1, 1), 8);
        assert_eq!(count_living_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_living_neighbors(&grid, 1, 0), 5);
    }

    #[test]
    fn test_count_excludes_center() {
        let grid = Grid::from_rows(&["...", ".x.", "..."]);
        assert_eq!(count_living_neighbors(&grid, 1, 1), 0);
        assert_eq!(count_living_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn test_count_at_isize_extremes() {
        let grid = Grid::from_rows(&["xxx", "xxx", "xxx"]);
        assert_eq!(count_living_neighbors(&grid, isize::MAX, 0), 0);
        assert_eq!(count_living_neighbors(&grid, 0, isize::MAX), 0);
        assert_eq!(count_living_neighbors(&grid, isize::MIN, isize::MIN), 0);
        assert_eq!(count_living_neighbors(&grid, isize::MIN, isize::MAX), 0);
        assert_eq!(
            RuleSet::default().next_state(&grid, isize::MAX, isize::MIN),
            Cell::Dead
        );
    }

    #[test]
    fn test_count_ignores_next_buffer() {
        let mut grid = Grid::new(3, 3);
        grid.write(Buffer::Next, 0, 0, Cell::Alive);
        assert_eq!(count_living_neighbors(&grid, 1, 1), 0);
    }

    #[test]
    fn test_next_state_surrounded_dead_cell() {
        let grid = Grid::from_rows(&["xxx", "x.x", "xxx"]);
        assert_eq!(RuleSet::default().next_state(&grid, 1, 1), Cell::Dead);

        let eight = RuleSet::from_counts(&[2, 3], &[8]).unwrap();
        assert_eq!(eight.next_state(&grid, 1, 1), Cell::Alive);
    }

    #[test]
    fn test_six_neighbors_births_only_under_default() {
        let grid = Grid::from_rows(&["xxx", "...", "xxx"]);
        assert_eq!(RuleSet::default().next_state(&grid, 1, 1), Cell::Alive);
        assert_eq!(RuleSet::conway().next_state(&grid, 1, 1), Cell::Dead);
    }
}
