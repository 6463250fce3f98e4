//! Error types for building a crossword and running the propagator.
//!
//! Two families of failure exist:
//!
//! - **Configuration errors** are raised while the grid model is built from a
//!   malformed structure. They are fatal to the run.
//! - **Invariant violations** signal that an algorithm was called with its
//!   preconditions broken, e.g. arc consistency over domains that were never
//!   made node-consistent.
//!
//! An unsatisfiable puzzle is *not* an error. The solver reports it as
//! `Ok(None)` and the propagator as [`Consistency::Wipeout`].
//!
//! [`Consistency::Wipeout`]: crate::csp::propagation::Consistency::Wipeout

use crate::csp::variable::Variable;

/// Convenience alias used throughout the `csp` module.
pub type Result<T> = std::result::Result<T, Error>;

/// The family an [`Error`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input describing the puzzle is malformed.
    Configuration,
    /// An algorithm was invoked with its contract broken.
    Invariant,
}

/// Errors produced by the crossword model and the constraint propagator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The structure has no rows at all.
    #[error("structure has no rows")]
    EmptyStructure,

    /// The structure's rows have no cells.
    #[error("structure rows have no cells")]
    ZeroWidth,

    /// A structure row differs in length from the first row.
    #[error("structure row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A word slot was declared with no cells.
    #[error("variable at ({i}, {j}) has zero length")]
    ZeroLengthVariable {
        /// Starting row.
        i: usize,
        /// Starting column.
        j: usize,
    },

    /// A candidate word is too short to hold a letter at an overlap index.
    #[error("word {word:?} in the domain of {variable} has no letter at index {index}")]
    OverlapOutOfRange {
        /// The variable whose domain held the word.
        variable: Variable,
        /// The offending candidate.
        word: String,
        /// The overlap index that was out of range.
        index: usize,
    },
}

impl Error {
    /// Returns the family this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyStructure
            | Self::ZeroWidth
            | Self::RaggedRow { .. }
            | Self::ZeroLengthVariable { .. } => ErrorKind::Configuration,
            Self::OverlapOutOfRange { .. } => ErrorKind::Invariant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::variable::Direction;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::EmptyStructure.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
            .kind(),
            ErrorKind::Configuration
        );

        let violation = Error::OverlapOutOfRange {
            variable: Variable::new(0, 0, Direction::Across, 3),
            word: String::from("AB"),
            index: 2,
        };
        assert_eq!(violation.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_messages() {
        let err = Error::RaggedRow {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "structure row 2 has 4 cells, expected 5");

        let err = Error::OverlapOutOfRange {
            variable: Variable::new(1, 2, Direction::Down, 4),
            word: String::from("AB"),
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "word \"AB\" in the domain of (1, 2) down 4 has no letter at index 3"
        );
    }
}
