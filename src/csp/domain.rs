//! The domain store: the candidate words still open to each variable.
//!
//! Each domain is a bit set over the dictionary's word ids plus a live count,
//! so membership tests are O(1) and a domain's size never needs recounting.
//! Domains start full and only shrink. Every removal goes through
//! [`Domains::remove`], which records it on the store's [`Trail`] so that a
//! speculative search can roll the store back to a [`Checkpoint`].

use crate::csp::crossword::Crossword;
use crate::csp::dictionary::WordId;
use crate::csp::trail::{Checkpoint, Trail};
use crate::csp::variable::{VarId, Variable};
use bit_vec::BitVec;
use std::collections::{BTreeMap, BTreeSet};

/// Candidate words for every variable of one crossword.
#[derive(Debug, Clone)]
pub struct Domains {
    sets: Vec<BitVec>,
    counts: Vec<usize>,
    trail: Trail,
}

impl Domains {
    /// Seeds every variable with the whole dictionary.
    #[must_use]
    pub fn new(crossword: &Crossword) -> Self {
        Self::full(crossword.num_vars(), crossword.dictionary().len())
    }

    /// `num_vars` domains, each holding all `num_words` word ids.
    #[must_use]
    pub fn full(num_vars: usize, num_words: usize) -> Self {
        Self {
            sets: vec![BitVec::from_elem(num_words, true); num_vars],
            counts: vec![num_words; num_vars],
            trail: Trail::new(),
        }
    }

    /// Number of domains.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.sets.len()
    }

    /// Number of candidates left for `var`.
    #[must_use]
    pub fn len(&self, var: VarId) -> usize {
        self.counts[var]
    }

    /// Whether `var` has no candidates left.
    #[must_use]
    pub fn is_empty(&self, var: VarId) -> bool {
        self.counts[var] == 0
    }

    /// The first variable whose domain is empty, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<VarId> {
        self.counts.iter().position(|&c| c == 0)
    }

    /// Total number of candidates across all domains.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Domain sizes indexed by variable.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.counts
    }

    /// Whether `word` is still a candidate for `var`.
    #[must_use]
    pub fn contains(&self, var: VarId, word: WordId) -> bool {
        self.sets[var].get(word).unwrap_or(false)
    }

    /// Candidates for `var` in ascending id order.
    pub fn iter(&self, var: VarId) -> impl Iterator<Item = WordId> + '_ {
        self.sets[var]
            .iter()
            .enumerate()
            .filter_map(|(word, present)| present.then_some(word))
    }

    /// Removes `word` from `var`'s domain, recording it on the trail.
    ///
    /// Returns whether the word was present.
    pub fn remove(&mut self, var: VarId, word: WordId) -> bool {
        if !self.contains(var, word) {
            return false;
        }
        self.sets[var].set(word, false);
        self.counts[var] -= 1;
        self.trail.push(var, word);
        true
    }

    /// Keeps only the candidates of `var` for which `keep` holds.
    ///
    /// Returns the number of words removed.
    pub fn retain<F: FnMut(WordId) -> bool>(&mut self, var: VarId, mut keep: F) -> usize {
        let doomed: Vec<WordId> = self.iter(var).filter(|&w| !keep(w)).collect();
        for &word in &doomed {
            self.remove(var, word);
        }
        doomed.len()
    }

    /// Reduces `var`'s domain to the single word `word`.
    ///
    /// Returns the number of words removed.
    pub fn reduce_to(&mut self, var: VarId, word: WordId) -> usize {
        self.retain(var, |w| w == word)
    }

    /// The current trail height.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        self.trail.checkpoint()
    }

    /// Puts back every word removed since `checkpoint`.
    ///
    /// Returns the number of words restored.
    pub fn rollback_to(&mut self, checkpoint: Checkpoint) -> usize {
        let mut restored = 0;
        for removal in self.trail.backstep_to(checkpoint) {
            self.sets[removal.var].set(removal.word, true);
            self.counts[removal.var] += 1;
            restored += 1;
        }
        restored
    }

    /// The removal log.
    #[must_use]
    pub const fn trail(&self) -> &Trail {
        &self.trail
    }

    /// A readable snapshot keyed by variable, for inspection and tests.
    #[must_use]
    pub fn to_map(&self, crossword: &Crossword) -> BTreeMap<Variable, BTreeSet<String>> {
        crossword
            .variables()
            .iter()
            .enumerate()
            .map(|(id, &var)| {
                let words = self
                    .iter(id)
                    .map(|w| crossword.word(w).to_owned())
                    .collect();
                (var, words)
            })
            .collect()
    }
}
