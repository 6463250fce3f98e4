#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! An ordered log of domain removals.
//!
//! Every word taken out of a domain is pushed onto the trail. A search that
//! prunes speculatively records the trail height before a branch
//! ([`Trail::checkpoint`]) and, when the branch fails, pops back to it,
//! restoring exactly the words removed in between and nothing else.

use crate::csp::dictionary::WordId;
use crate::csp::variable::VarId;

/// A single word removed from a single domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Removal {
    /// The variable whose domain shrank.
    pub var: VarId,
    /// The word that was removed.
    pub word: WordId,
}

/// Trail height, as returned by [`Trail::checkpoint`].
pub type Checkpoint = usize;

/// The removal log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trail {
    removals: Vec<Removal>,
}

impl Trail {
    /// An empty trail.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            removals: Vec::new(),
        }
    }

    /// Records a removal.
    pub fn push(&mut self, var: VarId, word: WordId) {
        self.removals.push(Removal { var, word });
    }

    /// The current height, to be passed back to [`Trail::backstep_to`].
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        self.removals.len()
    }

    /// Pops every removal recorded after `checkpoint`, newest first.
    ///
    /// A checkpoint above the current height pops nothing.
    pub fn backstep_to(&mut self, checkpoint: Checkpoint) -> impl Iterator<Item = Removal> + '_ {
        let from = checkpoint.min(self.removals.len());
        self.removals.drain(from..).rev()
    }

    /// Number of recorded removals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.removals.len()
    }

    /// Whether nothing has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }

    /// All removals, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Removal> {
        self.removals.iter()
    }
}
