#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver interface and its compile-time configurations.
//!
//! A solver is generic over a [`SolverConfig`], which picks the variable
//! selection heuristic, the value ordering heuristic, the AC-3 worklist and
//! whether arc consistency is maintained during search. Swapping a config
//! changes the search strategy without touching the search itself.

use crate::csp::assignment::Solution;
use crate::csp::crossword::Crossword;
use crate::csp::error::Result;
use crate::csp::propagation::{ArcQueue, ArcStack, ArcWorklist};
use crate::csp::value_ordering::{DictionaryOrder, LeastConstrainingValue, ValueOrdering};
use crate::csp::variable_selection::{FixedOrder, MinimumRemainingValues, VariableSelection};
use std::fmt;
use std::fmt::Debug;

/// Counters collected while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SolutionStats {
    /// Bindings tried.
    pub decisions: usize,
    /// Bindings undone after their branch failed.
    pub backtracks: usize,
    /// Bindings rejected by the consistency check or by a wipeout during
    /// maintained arc consistency.
    pub consistency_failures: usize,
    /// Arc revisions performed, including the initial AC-3 pass.
    pub revisions: usize,
    /// Candidate words removed by propagation.
    pub removals: usize,
    /// Deepest number of simultaneous bindings reached.
    pub max_depth: usize,
}

impl fmt::Display for SolutionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24}{:>12}", "Decisions", self.decisions)?;
        writeln!(f, "{:<24}{:>12}", "Backtracks", self.backtracks)?;
        writeln!(
            f,
            "{:<24}{:>12}",
            "Consistency failures", self.consistency_failures
        )?;
        writeln!(f, "{:<24}{:>12}", "Revisions", self.revisions)?;
        writeln!(f, "{:<24}{:>12}", "Removals", self.removals)?;
        writeln!(f, "{:<24}{:>12}", "Max depth", self.max_depth)
    }
}

/// Chooses the strategies a solver is built from.
pub trait SolverConfig: Debug + Clone {
    /// Which unassigned variable to branch on.
    type VariableSelector: VariableSelection;
    /// In which order to try a variable's candidates.
    type ValueOrder: ValueOrdering;
    /// Arc processing order for AC-3.
    type Worklist: ArcWorklist + Clone;

    /// Whether to run AC-3 after every binding and prune on wipeout.
    const MAINTAIN_ARC_CONSISTENCY: bool = false;
}

/// Minimum remaining values with the degree tie-break, least-constraining
/// value ordering and a FIFO worklist. Arc consistency is enforced once,
/// before the search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConfig;

impl SolverConfig for DefaultConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueOrder = LeastConstrainingValue;
    type Worklist = ArcQueue;
}

/// [`DefaultConfig`] that also maintains arc consistency after each binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacConfig;

impl SolverConfig for MacConfig {
    type VariableSelector = MinimumRemainingValues;
    type ValueOrder = LeastConstrainingValue;
    type Worklist = ArcQueue;

    const MAINTAIN_ARC_CONSISTENCY: bool = true;
}

/// No heuristics: variables in id order, words in dictionary order, LIFO
/// worklist. Useful as a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaiveConfig;

impl SolverConfig for NaiveConfig {
    type VariableSelector = FixedOrder;
    type ValueOrder = DictionaryOrder;
    type Worklist = ArcStack;
}

/// A crossword solver.
pub trait Solver<C: SolverConfig = DefaultConfig> {
    /// Takes ownership of a puzzle and prepares to solve it.
    fn new(crossword: Crossword) -> Self;

    /// Searches for a fill.
    ///
    /// Returns `Ok(None)` when the puzzle has no solution.
    ///
    /// # Errors
    ///
    /// Only on an internal invariant violation; an unsatisfiable puzzle is
    /// not an error.
    fn solve(&mut self) -> Result<Option<Solution>>;

    /// Counters for the most recent call to [`Solver::solve`].
    fn stats(&self) -> SolutionStats;
}
