#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Word slots of a crossword.
//!
//! A [`Variable`] is a plain value: two slots are the same slot exactly when
//! their position, direction and length agree. It is `Copy`, hashable and
//! totally ordered, so it can key maps and give the solver a stable iteration
//! order.

use crate::csp::error::{Error, Result};
use std::fmt;

/// Index of a variable in [`Crossword::variables`](crate::csp::crossword::Crossword::variables).
pub type VarId = usize;

/// Orientation of a word slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One word slot: starting cell, orientation and number of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    /// Starting row.
    pub i: usize,
    /// Starting column.
    pub j: usize,
    /// Orientation.
    pub direction: Direction,
    /// Number of cells, always at least one.
    pub length: usize,
}

impl Variable {
    /// Creates a variable without validating its length.
    ///
    /// The grid model only derives slots of two or more cells, so this is what
    /// it uses internally. Prefer [`Variable::try_new`] for hand-built slots.
    #[must_use]
    pub const fn new(i: usize, j: usize, direction: Direction, length: usize) -> Self {
        Self {
            i,
            j,
            direction,
            length,
        }
    }

    /// Creates a variable, rejecting a zero length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLengthVariable`] if `length` is zero.
    pub fn try_new(i: usize, j: usize, direction: Direction, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::ZeroLengthVariable { i, j });
        }
        Ok(Self::new(i, j, direction, length))
    }

    /// The cell holding letter `k` of this slot.
    #[must_use]
    pub const fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.i, self.j + k),
            Direction::Down => (self.i + k, self.j),
        }
    }

    /// The cells covered by this slot, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let var = *self;
        (0..var.length).map(move |k| var.cell(k))
    }

    /// The letter index at which this slot covers `cell`, if it does.
    #[must_use]
    pub const fn index_of(&self, cell: (usize, usize)) -> Option<usize> {
        let (row, col) = cell;
        let k = match self.direction {
            Direction::Across if row == self.i && col >= self.j => col - self.j,
            Direction::Down if col == self.j && row >= self.i => row - self.i,
            _ => return None,
        };
        if k < self.length { Some(k) } else { None }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} {}",
            self.i, self.j, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_value_equality_and_hash() {
        let a = Variable::new(1, 2, Direction::Across, 4);
        let b = Variable::new(1, 2, Direction::Across, 4);
        let c = Variable::new(1, 2, Direction::Down, 4);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: FxHashSet<Variable> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering() {
        let mut vars = vec![
            Variable::new(1, 0, Direction::Across, 3),
            Variable::new(0, 2, Direction::Down, 3),
            Variable::new(0, 2, Direction::Across, 3),
            Variable::new(0, 0, Direction::Down, 5),
        ];
        vars.sort();

        assert_eq!(
            vars,
            vec![
                Variable::new(0, 0, Direction::Down, 5),
                Variable::new(0, 2, Direction::Across, 3),
                Variable::new(0, 2, Direction::Down, 3),
                Variable::new(1, 0, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn test_cells() {
        let across = Variable::new(2, 1, Direction::Across, 3);
        assert_eq!(across.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);

        let down = Variable::new(0, 4, Direction::Down, 2);
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(0, 4), (1, 4)]);
    }

    #[test]
    fn test_index_of() {
        let across = Variable::new(2, 1, Direction::Across, 3);
        assert_eq!(across.index_of((2, 3)), Some(2));
        assert_eq!(across.index_of((2, 4)), None);
        assert_eq!(across.index_of((2, 0)), None);
        assert_eq!(across.index_of((1, 2)), None);

        let down = Variable::new(1, 1, Direction::Down, 3);
        assert_eq!(down.index_of((1, 1)), Some(0));
        assert_eq!(down.index_of((3, 1)), Some(2));
        assert_eq!(down.index_of((0, 1)), None);
    }

    #[test]
    fn test_try_new_rejects_zero_length() {
        assert_eq!(
            Variable::try_new(3, 4, Direction::Down, 0),
            Err(Error::ZeroLengthVariable { i: 3, j: 4 })
        );
        assert!(Variable::try_new(3, 4, Direction::Down, 1).is_ok());
    }

    #[test]
    fn test_display() {
        let v = Variable::new(0, 3, Direction::Across, 5);
        assert_eq!(v.to_string(), "(0, 3) across 5");
    }
}
