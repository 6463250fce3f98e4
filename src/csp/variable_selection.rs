#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Heuristics choosing which unassigned variable to branch on next.

use crate::csp::assignment::Assignment;
use crate::csp::crossword::Crossword;
use crate::csp::domain::Domains;
use crate::csp::variable::VarId;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Seed used by [`RandomTieBreak::new`].
pub const DEFAULT_SEED: u64 = 0x5eed_c0de;

/// Picks the next variable to assign.
pub trait VariableSelection: Debug + Clone {
    /// Creates the heuristic for a given puzzle.
    fn new(crossword: &Crossword) -> Self;

    /// Returns an unassigned variable, or `None` if every variable is bound.
    fn pick(
        &mut self,
        crossword: &Crossword,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VarId>;
}

/// Ranks `a` against `b`: fewer remaining values first, then more neighbours.
fn compare(crossword: &Crossword, domains: &Domains, a: VarId, b: VarId) -> Ordering {
    domains
        .len(a)
        .cmp(&domains.len(b))
        .then_with(|| crossword.degree(b).cmp(&crossword.degree(a)))
}

/// Minimum remaining values, then highest degree.
///
/// A later variable only displaces the current pick when it is strictly
/// better, so complete ties go to the lowest [`VarId`], i.e. the first slot
/// in reading order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValues;

impl VariableSelection for MinimumRemainingValues {
    fn new(_: &Crossword) -> Self {
        Self
    }

    fn pick(
        &mut self,
        crossword: &Crossword,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VarId> {
        let mut unassigned = assignment.unassigned();
        let first = unassigned.next()?;
        Some(unassigned.fold(first, |best, var| {
            if compare(crossword, domains, var, best) == Ordering::Less {
                var
            } else {
                best
            }
        }))
    }
}

/// Minimum remaining values and degree as above, with complete ties settled
/// by a seeded random generator. The same seed gives the same sequence of
/// picks.
#[derive(Debug, Clone)]
pub struct RandomTieBreak {
    rng: fastrand::Rng,
}

impl RandomTieBreak {
    /// A tie-breaker seeded with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl VariableSelection for RandomTieBreak {
    fn new(_: &Crossword) -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    fn pick(
        &mut self,
        crossword: &Crossword,
        domains: &Domains,
        assignment: &Assignment,
    ) -> Option<VarId> {
        let mut ties: Vec<VarId> = Vec::new();
        for var in assignment.unassigned() {
            match ties.first().map(|&best| compare(crossword, domains, var, best)) {
                None | Some(Ordering::Equal) => ties.push(var),
                Some(Ordering::Less) => {
                    ties.clear();
                    ties.push(var);
                }
                Some(Ordering::Greater) => {}
            }
        }

        match ties.len() {
            0 => None,
            1 => Some(ties[0]),
            n => Some(ties[self.rng.usize(..n)]),
        }
    }
}

/// The first unassigned variable in id order, ignoring domains entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrder;

impl VariableSelection for FixedOrder {
    fn new(_: &Crossword) -> Self {
        Self
    }

    fn pick(&mut self, _: &Crossword, _: &Domains, assignment: &Assignment) -> Option<VarId> {
        assignment.unassigned().next()
    }
}
