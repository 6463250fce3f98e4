#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The fixed geometry of a crossword: which cells can hold a letter.
//!
//! The textual form has one line per grid row. An underscore (`_`) marks a
//! fillable cell and every other character a blocked one:
//!
//! ```text
//! #___#
//! #_##_
//! #_##_
//! #_##_
//! #____
//! ```

use crate::csp::error::{Error, Result};
use bit_vec::BitVec;
use std::fmt;
use std::str::FromStr;

/// The character marking a fillable cell in the textual form.
pub const FILLABLE: char = '_';

/// A rectangular grid of fillable and blocked cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    height: usize,
    width: usize,
    cells: BitVec,
}

impl Structure {
    /// Builds a structure from rows of fillable flags.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyStructure`] if there are no rows.
    /// - [`Error::ZeroWidth`] if the rows have no cells.
    /// - [`Error::RaggedRow`] if a row differs in length from the first.
    pub fn new(rows: &[Vec<bool>]) -> Result<Self> {
        let first = rows.first().ok_or(Error::EmptyStructure)?;
        let width = first.len();
        if width == 0 {
            return Err(Error::ZeroWidth);
        }

        let mut cells = BitVec::with_capacity(rows.len() * width);
        for (row, flags) in rows.iter().enumerate() {
            if flags.len() != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    found: flags.len(),
                });
            }
            for &fillable in flags {
                cells.push(fillable);
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    /// Parses the textual form described in the module docs.
    ///
    /// A single trailing empty line is ignored so that files ending in a
    /// newline parse as expected.
    ///
    /// # Errors
    ///
    /// The same configuration errors as [`Structure::new`].
    pub fn parse(input: &str) -> Result<Self> {
        let rows: Vec<Vec<bool>> = input
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .map(|line| line.chars().map(|c| c == FILLABLE).collect())
            .collect();
        Self::new(&rows)
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` can hold a letter.
    ///
    /// Cells outside the grid are treated as blocked.
    #[must_use]
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of fillable cells.
    #[must_use]
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|&c| c).count()
    }
}

impl FromStr for Structure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_fillable(row, col) { FILLABLE } else { '#' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let s = Structure::parse("#__\n_#_\n").unwrap();

        assert_eq!(s.height(), 2);
        assert_eq!(s.width(), 3);
        assert!(!s.is_fillable(0, 0));
        assert!(s.is_fillable(0, 1));
        assert!(s.is_fillable(1, 0));
        assert!(!s.is_fillable(1, 1));
        assert_eq!(s.fillable_count(), 4);
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let s = Structure::parse("__\n__").unwrap();
        assert!(!s.is_fillable(2, 0));
        assert!(!s.is_fillable(0, 2));
    }

    #[test]
    fn test_any_other_char_is_blocked() {
        let s: Structure = "_x█ _".parse().unwrap();
        assert_eq!(s.width(), 5);
        assert_eq!(s.fillable_count(), 2);
    }

    #[test]
    fn test_windows_line_endings() {
        let s = Structure::parse("__\r\n_#\r\n").unwrap();
        assert_eq!(s.width(), 2);
        assert_eq!(s.fillable_count(), 3);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert_eq!(
            Structure::parse("___\n__\n___"),
            Err(Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Structure::parse(""), Err(Error::EmptyStructure));
        assert_eq!(Structure::new(&[]), Err(Error::EmptyStructure));
        assert_eq!(Structure::new(&[vec![]]), Err(Error::ZeroWidth));
    }

    #[test]
    fn test_display_round_trips() {
        let text = "#___#\n#_##_\n";
        let s = Structure::parse(text).unwrap();
        assert_eq!(s.to_string(), text);
    }
}
