#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking search over the domain store.
//!
//! [`Backtracking`] first applies the unary constraints
//! ([`enforce_node_consistency`]) and AC-3 over every crossing, then walks
//! the search tree depth first:
//!
//! 1. pick an unassigned variable with the configured [`VariableSelection`];
//! 2. try its candidates in the order given by the configured
//!    [`ValueOrdering`], keeping a binding only if it is consistent with the
//!    bindings made so far;
//! 3. recurse, and undo the binding when the subtree has no solution.
//!
//! The recursion is at most as deep as the number of variables.
//!
//! With [`SolverConfig::MAINTAIN_ARC_CONSISTENCY`] set, every consistent
//! binding also narrows the variable's domain to the bound word and re-runs
//! AC-3 from the arcs pointing at it. A wipeout prunes the branch early. The
//! domains are rolled back to a checkpoint before the next sibling is tried.

use crate::csp::assignment::{Assignment, Solution};
use crate::csp::crossword::Crossword;
use crate::csp::dictionary::WordId;
use crate::csp::domain::Domains;
use crate::csp::error::Result;
use crate::csp::propagation::{Arc, ArcConsistency, Consistency, enforce_node_consistency};
use crate::csp::solver::{DefaultConfig, SolutionStats, Solver, SolverConfig};
use crate::csp::value_ordering::ValueOrdering;
use crate::csp::variable::VarId;
use crate::csp::variable_selection::VariableSelection;
use log::{debug, trace};
use smallvec::SmallVec;

/// Depth-first backtracking solver.
#[derive(Debug, Clone)]
pub struct Backtracking<C: SolverConfig = DefaultConfig> {
    crossword: Crossword,
    domains: Domains,
    assignment: Assignment,
    selector: C::VariableSelector,
    ordering: C::ValueOrder,
    propagator: ArcConsistency<C::Worklist>,
    stats: SolutionStats,
}

impl<C: SolverConfig> Solver<C> for Backtracking<C> {
    fn new(crossword: Crossword) -> Self {
        let selector = C::VariableSelector::new(&crossword);
        let ordering = C::ValueOrder::new(&crossword);
        Self::from_parts(crossword, selector, ordering)
    }

    fn solve(&mut self) -> Result<Option<Solution>> {
        self.reset();
        debug!(
            "solving {} variables over {} words",
            self.crossword.num_vars(),
            self.crossword.dictionary().len()
        );

        self.stats.removals = enforce_node_consistency(&self.crossword, &mut self.domains);

        let initial = self.propagator.run(&self.crossword, &mut self.domains, None)?;
        debug!(
            "initial propagation: {initial:?}, domain sizes {:?}",
            self.domains.sizes()
        );
        if let Consistency::Wipeout(var) = initial {
            debug!(
                "no candidates left for {}, puzzle is unsatisfiable",
                self.crossword.variable(var)
            );
            return Ok(None);
        }

        let solution = self
            .backtrack(0)?
            .then(|| self.assignment.to_solution(&self.crossword));
        debug!(
            "search finished with {} after {} decisions and {} backtracks",
            if solution.is_some() { "a solution" } else { "no solution" },
            self.stats.decisions,
            self.stats.backtracks
        );
        Ok(solution)
    }

    fn stats(&self) -> SolutionStats {
        SolutionStats {
            revisions: self.propagator.revisions,
            removals: self.stats.removals + self.propagator.removals,
            ..self.stats
        }
    }
}

impl<C: SolverConfig> Backtracking<C> {
    /// Builds a solver around already constructed heuristics, e.g. a
    /// [`RandomTieBreak`](crate::csp::variable_selection::RandomTieBreak)
    /// with a chosen seed.
    #[must_use]
    pub fn from_parts(
        crossword: Crossword,
        selector: C::VariableSelector,
        ordering: C::ValueOrder,
    ) -> Self {
        let domains = Domains::new(&crossword);
        let assignment = Assignment::new(crossword.num_vars());
        Self {
            crossword,
            domains,
            assignment,
            selector,
            ordering,
            propagator: ArcConsistency::new(),
            stats: SolutionStats::default(),
        }
    }

    /// The puzzle being solved.
    #[must_use]
    pub const fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    /// The domain store in its current state.
    #[must_use]
    pub const fn domains(&self) -> &Domains {
        &self.domains
    }

    /// The assignment in its current state.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Starts over from full domains and an empty assignment.
    fn reset(&mut self) {
        self.domains = Domains::new(&self.crossword);
        self.assignment = Assignment::new(self.crossword.num_vars());
        self.propagator = ArcConsistency::new();
        self.stats = SolutionStats::default();
    }

    /// Extends the assignment to a complete, consistent one.
    ///
    /// Returns `true` with the assignment left complete, or `false` with it
    /// restored to its state on entry.
    fn backtrack(&mut self, depth: usize) -> Result<bool> {
        let Some(var) = self
            .selector
            .pick(&self.crossword, &self.domains, &self.assignment)
        else {
            return Ok(true);
        };

        let candidates = self
            .ordering
            .order(&self.crossword, &self.domains, &self.assignment, var);

        for word in candidates {
            self.stats.decisions += 1;
            self.stats.max_depth = self.stats.max_depth.max(depth + 1);
            self.assignment.assign(var, word);
            trace!(
                "depth {depth}: {} = {}",
                self.crossword.variable(var),
                self.crossword.word(word)
            );

            if self.assignment.is_consistent_with(&self.crossword, var) {
                if self.descend(var, word, depth)? {
                    return Ok(true);
                }
            } else {
                self.stats.consistency_failures += 1;
            }

            self.assignment.unassign(var);
            self.stats.backtracks += 1;
            trace!(
                "depth {depth}: undo {} = {}",
                self.crossword.variable(var),
                self.crossword.word(word)
            );
        }

        Ok(false)
    }

    /// Searches below a consistent binding of `var` to `word`, propagating
    /// first if the config asks for it.
    fn descend(&mut self, var: VarId, word: WordId, depth: usize) -> Result<bool> {
        if !C::MAINTAIN_ARC_CONSISTENCY {
            return self.backtrack(depth + 1);
        }

        let checkpoint = self.domains.checkpoint();
        self.domains.reduce_to(var, word);

        let arcs: SmallVec<[Arc; 8]> = self
            .crossword
            .neighbors(var)
            .iter()
            .filter(|&&z| !self.assignment.is_assigned(z))
            .map(|&z| (z, var))
            .collect();

        let found = match self
            .propagator
            .run(&self.crossword, &mut self.domains, Some(&arcs[..]))?
        {
            Consistency::Consistent => self.backtrack(depth + 1)?,
            Consistency::Wipeout(empty) => {
                self.stats.consistency_failures += 1;
                trace!(
                    "depth {depth}: wipeout of {} after binding {}",
                    self.crossword.variable(empty),
                    self.crossword.variable(var)
                );
                false
            }
        };

        if !found {
            self.domains.rollback_to(checkpoint);
        }
        Ok(found)
    }
}
