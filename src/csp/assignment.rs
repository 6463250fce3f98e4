#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Partial assignments built during search, and the solutions they become.

use crate::csp::crossword::Crossword;
use crate::csp::dictionary::WordId;
use crate::csp::variable::{VarId, Variable};
use core::ops::Index;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fmt;

/// A reversible mapping from variables to chosen words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    assigned: usize,
}

impl Index<VarId> for Assignment {
    type Output = Option<WordId>;

    fn index(&self, index: VarId) -> &Self::Output {
        &self.words[index]
    }
}

impl Assignment {
    /// An empty assignment over `num_vars` variables.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            words: vec![None; num_vars],
            assigned: 0,
        }
    }

    /// Binds `var` to `word`, replacing any previous binding.
    pub fn assign(&mut self, var: VarId, word: WordId) {
        if self.words[var].replace(word).is_none() {
            self.assigned += 1;
        }
    }

    /// Removes the binding of `var`, if any.
    pub fn unassign(&mut self, var: VarId) {
        if self.words[var].take().is_some() {
            self.assigned -= 1;
        }
    }

    /// The word bound to `var`.
    #[must_use]
    pub fn get(&self, var: VarId) -> Option<WordId> {
        self.words[var]
    }

    /// Whether `var` is bound.
    #[must_use]
    pub fn is_assigned(&self, var: VarId) -> bool {
        self.words[var].is_some()
    }

    /// Number of bound variables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.assigned
    }

    /// Whether nothing is bound.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Whether every variable is bound.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned == self.words.len()
    }

    /// Bound variables with their words, ascending by variable.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(var, word)| word.map(|w| (var, w)))
    }

    /// Unbound variables, ascending.
    pub fn unassigned(&self) -> impl Iterator<Item = VarId> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(var, word)| word.is_none().then_some(var))
    }

    /// Whether the whole assignment satisfies every constraint among its
    /// bound variables: distinct words, matching lengths and agreeing
    /// crossings.
    #[must_use]
    pub fn is_consistent(&self, crossword: &Crossword) -> bool {
        let mut used = FxHashSet::default();
        for (var, word) in self.iter() {
            if !used.insert(word) || !self.fits(crossword, var, word) {
                return false;
            }
        }
        true
    }

    /// Whether the constraints involving `var` hold, assuming the rest of the
    /// assignment was already consistent.
    #[must_use]
    pub fn is_consistent_with(&self, crossword: &Crossword, var: VarId) -> bool {
        let Some(word) = self.words[var] else {
            return true;
        };
        let duplicate = self
            .iter()
            .any(|(other, other_word)| other != var && other_word == word);
        !duplicate && self.fits(crossword, var, word)
    }

    /// Length and crossing checks for `word` in `var`.
    fn fits(&self, crossword: &Crossword, var: VarId, word: WordId) -> bool {
        let dictionary = crossword.dictionary();
        if dictionary.word_len(word) != crossword.variable(var).length {
            return false;
        }

        crossword.neighbors(var).iter().all(|&neighbor| {
            let (Some(other), Some((k1, k2))) =
                (self.words[neighbor], crossword.overlap(var, neighbor))
            else {
                return true;
            };
            match (dictionary.letter(word, k1), dictionary.letter(other, k2)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        })
    }

    /// Converts the bound variables into a [`Solution`].
    #[must_use]
    pub fn to_solution(&self, crossword: &Crossword) -> Solution {
        self.iter()
            .map(|(var, word)| (*crossword.variable(var), crossword.word(word).to_owned()))
            .collect()
    }
}

/// A finished fill: each variable with its word, ordered by variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution(BTreeMap<Variable, String>);

impl Solution {
    /// The word placed in `var`.
    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<&str> {
        self.0.get(var).map(String::as_str)
    }

    /// Number of filled variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was filled, which is the case for a grid with no
    /// variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Variables and their words, ordered by variable.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.0.iter().map(|(var, word)| (var, word.as_str()))
    }

    /// The placed words, ordered by variable.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

impl From<BTreeMap<Variable, String>> for Solution {
    fn from(map: BTreeMap<Variable, String>) -> Self {
        Self(map)
    }
}

impl From<Solution> for BTreeMap<Variable, String> {
    fn from(solution: Solution) -> Self {
        solution.0
    }
}

impl FromIterator<(Variable, String)> for Solution {
    fn from_iter<T: IntoIterator<Item = (Variable, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, word) in &self.0 {
            writeln!(f, "{var}: {word}")?;
        }
        Ok(())
    }
}
