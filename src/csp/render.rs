#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Turning a solution back into a grid of letters.

use crate::csp::assignment::Solution;
use crate::csp::crossword::Crossword;
use std::fmt;

/// One square of a rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not part of any word.
    Blocked,
    /// Fillable, but no placed word covers it.
    Empty,
    /// Covered by a placed word.
    Letter(char),
}

impl Cell {
    /// The letter in this cell, if any.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            Self::Blocked | Self::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked => write!(f, "█"),
            Self::Empty => write!(f, " "),
            Self::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// A `height x width` grid of [`Cell`]s, printed one row per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    width: usize,
    cells: Vec<Cell>,
}

impl LetterGrid {
    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len().checked_div(self.width).unwrap_or(0)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The cell at `(row, col)`, `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Crossword {
    /// Lays the words of `solution` out on the grid.
    ///
    /// Cells not covered by any variable of the solution stay
    /// [`Cell::Empty`]. Letters that would fall outside the grid are
    /// dropped.
    #[must_use]
    pub fn letter_grid(&self, solution: &Solution) -> LetterGrid {
        let (height, width) = (self.height(), self.width());
        let mut cells: Vec<Cell> = (0..height)
            .flat_map(|i| (0..width).map(move |j| (i, j)))
            .map(|(i, j)| {
                if self.structure().is_fillable(i, j) {
                    Cell::Empty
                } else {
                    Cell::Blocked
                }
            })
            .collect();

        for (var, word) in solution.iter() {
            for ((i, j), letter) in var.cells().zip(word.chars()) {
                if i < height && j < width {
                    cells[i * width + j] = Cell::Letter(letter);
                }
            }
        }

        LetterGrid { width, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::variable::{Direction, Variable};
    use std::collections::BTreeMap;

    const STRUCTURE: &str = "\
#___#
#_##_
#_##_
#_##_
#____
";

    fn crossword() -> Crossword {
        Crossword::from_text(STRUCTURE, "six\nseven\nfive\nnine").unwrap()
    }

    fn solution() -> Solution {
        Solution::from(BTreeMap::from([
            (Variable::new(0, 1, Direction::Across, 3), String::from("SIX")),
            (Variable::new(0, 1, Direction::Down, 5), String::from("SEVEN")),
            (Variable::new(1, 4, Direction::Down, 4), String::from("FIVE")),
            (Variable::new(4, 1, Direction::Across, 4), String::from("NINE")),
        ]))
    }

    #[test]
    fn test_full_grid() {
        let grid = crossword().letter_grid(&solution());
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.width(), 5);
        assert_eq!(
            grid.to_string(),
            "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n"
        );
    }

    #[test]
    fn test_partial_grid_leaves_cells_empty() {
        let c = crossword();
        let partial: Solution = solution()
            .iter()
            .filter(|(var, _)| var.direction == Direction::Across)
            .map(|(var, word)| (*var, word.to_owned()))
            .collect();

        let grid = c.letter_grid(&partial);
        assert_eq!(grid.get(0, 1), Some(Cell::Letter('S')));
        assert_eq!(grid.get(1, 1), Some(Cell::Empty));
        assert_eq!(grid.get(0, 0), Some(Cell::Blocked));
        assert_eq!(grid.get(0, 5), None);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.to_string().lines().nth(1), Some("█ ██ "));
    }

    #[test]
    fn test_empty_solution() {
        let grid = crossword().letter_grid(&Solution::default());
        assert!(grid.rows().flatten().all(|cell| cell.letter().is_none()));
        assert_eq!(grid.rows().count(), 5);
    }
}
