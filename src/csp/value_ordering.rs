#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Heuristics ordering the candidate words of the variable being branched on.

use crate::csp::assignment::Assignment;
use crate::csp::crossword::Crossword;
use crate::csp::dictionary::WordId;
use crate::csp::domain::Domains;
use crate::csp::variable::VarId;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt::Debug;

/// Orders the words to try for a variable.
pub trait ValueOrdering: Debug + Clone {
    /// Creates the heuristic for a given puzzle.
    fn new(crossword: &Crossword) -> Self;

    /// The candidates of `var` in the order they should be tried.
    fn order(
        &self,
        crossword: &Crossword,
        domains: &Domains,
        assignment: &Assignment,
        var: VarId,
    ) -> Vec<WordId>;
}

/// Least-constraining value: words that rule out the fewest candidates of
/// `var`'s unassigned neighbours come first. Equal counts keep dictionary
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    /// How many candidates of `var`'s unassigned neighbours would become
    /// impossible if `var` took `word`.
    #[must_use]
    pub fn eliminated(
        crossword: &Crossword,
        domains: &Domains,
        assignment: &Assignment,
        var: VarId,
        word: WordId,
    ) -> usize {
        Crossings::new(crossword, domains, assignment, var).eliminated(crossword, word)
    }
}

impl ValueOrdering for LeastConstrainingValue {
    fn new(_: &Crossword) -> Self {
        Self
    }

    fn order(
        &self,
        crossword: &Crossword,
        domains: &Domains,
        assignment: &Assignment,
        var: VarId,
    ) -> Vec<WordId> {
        let crossings = Crossings::new(crossword, domains, assignment, var);
        if crossings.0.is_empty() {
            return domains.iter(var).collect();
        }

        domains
            .iter(var)
            .sorted_by_cached_key(|&word| crossings.eliminated(crossword, word))
            .collect()
    }
}

/// Candidates in dictionary order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryOrder;

impl ValueOrdering for DictionaryOrder {
    fn new(_: &Crossword) -> Self {
        Self
    }

    fn order(&self, _: &Crossword, domains: &Domains, _: &Assignment, var: VarId) -> Vec<WordId> {
        domains.iter(var).collect()
    }
}

/// For each unassigned neighbour of a variable: the letter position in the
/// variable, the neighbour's domain size, and how many of its candidates
/// carry each letter at the crossing.
struct Crossings(Vec<(usize, usize, FxHashMap<char, usize>)>);

impl Crossings {
    fn new(crossword: &Crossword, domains: &Domains, assignment: &Assignment, var: VarId) -> Self {
        let dictionary = crossword.dictionary();
        Self(
            crossword
                .neighbors(var)
                .iter()
                .filter(|&&n| !assignment.is_assigned(n))
                .filter_map(|&n| {
                    let (k_var, k_n) = crossword.overlap(var, n)?;
                    let counts = domains
                        .iter(n)
                        .filter_map(|w| dictionary.letter(w, k_n))
                        .counts()
                        .into_iter()
                        .collect();
                    Some((k_var, domains.len(n), counts))
                })
                .collect(),
        )
    }

    fn eliminated(&self, crossword: &Crossword, word: WordId) -> usize {
        let dictionary = crossword.dictionary();
        self.0
            .iter()
            .map(|(k, size, counts)| {
                let kept = dictionary
                    .letter(word, *k)
                    .and_then(|c| counts.get(&c).copied())
                    .unwrap_or(0);
                size - kept
            })
            .sum()
    }
}
