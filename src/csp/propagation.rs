#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Constraint propagation over the domain store.
//!
//! Two filters are provided:
//!
//! - [`enforce_node_consistency`] applies the unary constraint: a word only
//!   fits a slot of its own length.
//! - [`ArcConsistency`] applies the binary crossing constraints with AC-3. It
//!   repeatedly revises directed arcs `(x, y)`, dropping words of `x` that have
//!   no partner in `y`, and whenever `x` shrinks it re-examines every arc
//!   `(z, x)` pointing into it.
//!
//! The order in which arcs are processed is set by an [`ArcWorklist`]. Any
//! order reaches the same fixed point; only the amount of work differs.

use crate::csp::crossword::Crossword;
use crate::csp::domain::Domains;
use crate::csp::dictionary::WordId;
use crate::csp::error::{Error, Result};
use crate::csp::variable::VarId;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt::Debug;

/// A directed constraint edge: revise `.0` against `.1`.
pub type Arc = (VarId, VarId);

/// Outcome of a propagation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consistency {
    /// Every domain is non-empty and the pass reached its fixed point.
    Consistent,
    /// The domain of the given variable was emptied; the current state has
    /// no solution.
    Wipeout(VarId),
}

impl Consistency {
    /// Whether propagation succeeded.
    #[must_use]
    pub const fn is_consistent(self) -> bool {
        matches!(self, Self::Consistent)
    }
}

/// Removes every word whose length differs from its variable's length.
///
/// Returns the number of words removed. Emptied domains are left for the
/// later stages to report.
pub fn enforce_node_consistency(crossword: &Crossword, domains: &mut Domains) -> usize {
    let dictionary = crossword.dictionary();
    let removed = crossword
        .variables()
        .iter()
        .enumerate()
        .map(|(var, v)| domains.retain(var, |word| dictionary.word_len(word) == v.length))
        .sum();

    debug!(
        "node consistency removed {removed} candidates, {} remain",
        domains.total()
    );
    removed
}

/// The pending arcs of an AC-3 run.
///
/// Implementations never hold the same arc twice.
pub trait ArcWorklist: Debug + Default {
    /// Adds an arc unless it is already waiting.
    fn push(&mut self, arc: Arc);
    /// Takes the next arc to revise.
    fn pop(&mut self) -> Option<Arc>;
    /// Number of waiting arcs.
    fn len(&self) -> usize;
    /// Drops every waiting arc.
    fn clear(&mut self);

    /// Whether no arcs are waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in, first-out arc processing.
#[derive(Debug, Clone, Default)]
pub struct ArcQueue {
    arcs: VecDeque<Arc>,
    pending: FxHashSet<Arc>,
}

impl ArcWorklist for ArcQueue {
    fn push(&mut self, arc: Arc) {
        if self.pending.insert(arc) {
            self.arcs.push_back(arc);
        }
    }

    fn pop(&mut self) -> Option<Arc> {
        let arc = self.arcs.pop_front()?;
        self.pending.remove(&arc);
        Some(arc)
    }

    fn len(&self) -> usize {
        self.arcs.len()
    }

    fn clear(&mut self) {
        self.arcs.clear();
        self.pending.clear();
    }
}

/// Last-in, first-out arc processing.
#[derive(Debug, Clone, Default)]
pub struct ArcStack {
    arcs: Vec<Arc>,
    pending: FxHashSet<Arc>,
}

impl ArcWorklist for ArcStack {
    fn push(&mut self, arc: Arc) {
        if self.pending.insert(arc) {
            self.arcs.push(arc);
        }
    }

    fn pop(&mut self) -> Option<Arc> {
        let arc = self.arcs.pop()?;
        self.pending.remove(&arc);
        Some(arc)
    }

    fn len(&self) -> usize {
        self.arcs.len()
    }

    fn clear(&mut self) {
        self.arcs.clear();
        self.pending.clear();
    }
}

/// The AC-3 propagator.
///
/// Keeps running totals of the revisions it performed and the words it
/// removed across calls.
#[derive(Debug, Clone, Default)]
pub struct ArcConsistency<W: ArcWorklist = ArcQueue> {
    worklist: W,
    /// Number of `revise` calls made.
    pub revisions: usize,
    /// Number of words removed.
    pub removals: usize,
}

impl<W: ArcWorklist> ArcConsistency<W> {
    /// A propagator with an empty worklist and zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `x` arc-consistent with `y`.
    ///
    /// Removes from `x`'s domain every word whose letter at the crossing
    /// matches no word left in `y`'s domain. Variables that do not cross are
    /// left alone.
    ///
    /// Returns whether `x`'s domain changed.
    ///
    /// # Errors
    ///
    /// [`Error::OverlapOutOfRange`] if a candidate of either variable is too
    /// short to reach the crossing, which means node consistency was not
    /// enforced first.
    pub fn revise(
        &mut self,
        crossword: &Crossword,
        domains: &mut Domains,
        x: VarId,
        y: VarId,
    ) -> Result<bool> {
        let Some((kx, ky)) = crossword.overlap(x, y) else {
            return Ok(false);
        };
        self.revisions += 1;

        let supported = letters_at(crossword, domains, y, ky)?;

        let dictionary = crossword.dictionary();
        let mut doomed = Vec::new();
        for word in domains.iter(x) {
            let letter = dictionary
                .letter(word, kx)
                .ok_or_else(|| out_of_range(crossword, x, word, kx))?;
            if !supported.contains(&letter) {
                doomed.push(word);
            }
        }

        for &word in &doomed {
            domains.remove(x, word);
        }
        self.removals += doomed.len();

        if !doomed.is_empty() {
            trace!("revise({x}, {y}) removed {} words", doomed.len());
        }
        Ok(!doomed.is_empty())
    }

    /// Runs AC-3 to its fixed point.
    ///
    /// With `arcs` set to `None` the worklist starts with every ordered pair
    /// of crossing variables; otherwise with the given arcs only.
    ///
    /// Returns [`Consistency::Wipeout`] as soon as any domain is empty,
    /// including one that was already empty on entry.
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from [`ArcConsistency::revise`].
    pub fn run(
        &mut self,
        crossword: &Crossword,
        domains: &mut Domains,
        arcs: Option<&[Arc]>,
    ) -> Result<Consistency> {
        if let Some(var) = domains.first_empty() {
            debug!("domain of {} is empty before propagation", crossword.variable(var));
            return Ok(Consistency::Wipeout(var));
        }

        self.worklist.clear();
        match arcs {
            Some(arcs) => arcs.iter().for_each(|&arc| self.worklist.push(arc)),
            None => crossword.arcs().for_each(|arc| self.worklist.push(arc)),
        }

        while let Some((x, y)) = self.worklist.pop() {
            if !self.revise(crossword, domains, x, y)? {
                continue;
            }
            if domains.is_empty(x) {
                self.worklist.clear();
                trace!("wipeout of {}", crossword.variable(x));
                return Ok(Consistency::Wipeout(x));
            }
            for &z in crossword.neighbors(x) {
                if z != y {
                    self.worklist.push((z, x));
                }
            }
        }

        Ok(Consistency::Consistent)
    }
}

/// Runs AC-3 from every arc with a FIFO worklist, after which `domains` is
/// arc-consistent unless a wipeout was reported.
///
/// # Errors
///
/// See [`ArcConsistency::run`].
pub fn ac3(crossword: &Crossword, domains: &mut Domains) -> Result<Consistency> {
    let result = ArcConsistency::<ArcQueue>::new().run(crossword, domains, None)?;
    debug!("ac3 finished: {result:?}, {} candidates remain", domains.total());
    Ok(result)
}

/// Letters found at position `k` across `var`'s domain.
fn letters_at(
    crossword: &Crossword,
    domains: &Domains,
    var: VarId,
    k: usize,
) -> Result<FxHashSet<char>> {
    let dictionary = crossword.dictionary();
    domains
        .iter(var)
        .map(|word| {
            dictionary
                .letter(word, k)
                .ok_or_else(|| out_of_range(crossword, var, word, k))
        })
        .collect()
}

fn out_of_range(crossword: &Crossword, var: VarId, word: WordId, index: usize) -> Error {
    Error::OverlapOutOfRange {
        variable: *crossword.variable(var),
        word: crossword.word(word).to_owned(),
        index,
    }
}

/// Checks the arc-consistency property directly: every candidate of every
/// crossing variable has a partner. Meant for assertions and tests.
#[must_use]
pub fn is_arc_consistent(crossword: &Crossword, domains: &Domains) -> bool {
    let dictionary = crossword.dictionary();
    crossword.arcs().all(|(x, y)| {
        let Some((kx, ky)) = crossword.overlap(x, y) else {
            return true;
        };
        let letters: FxHashSet<char> = domains
            .iter(y)
            .filter_map(|w| dictionary.letter(w, ky))
            .collect();
        domains
            .iter(x)
            .all(|w| dictionary.letter(w, kx).is_some_and(|c| letters.contains(&c)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::error::ErrorKind;

    /// Across and down share their first letter.
    const CROSS: &str = "___\n_##\n_##";

    /// Letter 1 of the across slot is letter 0 of the down slot.
    const TEE: &str = "___\n#_#\n#_#";

    fn setup(words: &str) -> (Crossword, Domains) {
        let c = Crossword::from_text(CROSS, words).unwrap();
        let d = Domains::new(&c);
        (c, d)
    }

    fn words(c: &Crossword, d: &Domains, var: VarId) -> Vec<String> {
        d.iter(var).map(|w| c.word(w).to_owned()).collect()
    }

    #[test]
    fn test_node_consistency() {
        let (c, mut d) = setup("abc\nab\nabcd\nxyz");
        let removed = enforce_node_consistency(&c, &mut d);

        assert_eq!(removed, 4);
        for var in 0..c.num_vars() {
            assert_eq!(words(&c, &d, var), vec!["ABC", "XYZ"]);
        }
    }

    #[test]
    fn test_node_consistency_can_empty_domains() {
        let (c, mut d) = setup("ab\nabcd");
        enforce_node_consistency(&c, &mut d);
        assert!(d.is_empty(0));
        assert!(d.is_empty(1));
    }

    #[test]
    fn test_revise() {
        let (c, mut d) = setup("abc\nade\nxyz\nbcd");
        enforce_node_consistency(&c, &mut d);
        d.retain(1, |w| c.word(w) == "ADE");

        let mut ac = ArcConsistency::<ArcQueue>::new();
        assert!(ac.revise(&c, &mut d, 0, 1).unwrap());
        assert_eq!(words(&c, &d, 0), vec!["ABC", "ADE"]);
        assert!(!ac.revise(&c, &mut d, 0, 1).unwrap());
        assert_eq!(ac.revisions, 2);
        assert_eq!(ac.removals, 2);
    }

    #[test]
    fn test_revise_without_overlap_is_noop() {
        let c = Crossword::from_text("___\n###\n___", "abc\nxyz").unwrap();
        let mut d = Domains::new(&c);
        d.retain(1, |w| c.word(w) == "XYZ");

        let mut ac = ArcConsistency::<ArcQueue>::new();
        assert!(!ac.revise(&c, &mut d, 0, 1).unwrap());
        assert_eq!(d.len(0), 2);
        assert_eq!(ac.revisions, 0);
    }

    #[test]
    fn test_revise_requires_node_consistency() {
        let c = Crossword::from_text(TEE, "abc\na").unwrap();
        let mut d = Domains::new(&c);
        let err = ArcConsistency::<ArcQueue>::new()
            .revise(&c, &mut d, 0, 1)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_ac3_reaches_fixed_point() {
        let c = Crossword::from_text(TEE, "abc\nbad\nxyz\ncat").unwrap();
        let mut d = Domains::new(&c);
        enforce_node_consistency(&c, &mut d);

        assert_eq!(ac3(&c, &mut d).unwrap(), Consistency::Consistent);
        assert_eq!(words(&c, &d, 0), vec!["ABC", "BAD", "CAT"]);
        assert_eq!(words(&c, &d, 1), vec!["ABC", "BAD"]);
        assert!(is_arc_consistent(&c, &d));
    }

    #[test]
    fn test_ac3_is_idempotent() {
        let c = Crossword::from_text(TEE, "abc\nbad\nxyz\ncat").unwrap();
        let mut d = Domains::new(&c);
        enforce_node_consistency(&c, &mut d);
        ac3(&c, &mut d).unwrap();

        let trail_len = d.trail().len();
        let sizes = d.sizes().to_vec();
        assert_eq!(ac3(&c, &mut d).unwrap(), Consistency::Consistent);
        assert_eq!(d.sizes(), sizes.as_slice());
        assert_eq!(d.trail().len(), trail_len);
    }

    #[test]
    fn test_ac3_reports_wipeout() {
        let (c, mut d) = setup("abc\nxyz");
        enforce_node_consistency(&c, &mut d);
        d.retain(0, |w| c.word(w) == "ABC");
        d.retain(1, |w| c.word(w) == "XYZ");

        assert!(matches!(ac3(&c, &mut d).unwrap(), Consistency::Wipeout(_)));
    }

    #[test]
    fn test_ac3_reports_empty_domain_on_entry() {
        let (c, mut d) = setup("ab");
        enforce_node_consistency(&c, &mut d);
        assert_eq!(ac3(&c, &mut d).unwrap(), Consistency::Wipeout(0));
    }

    #[test]
    fn test_ac3_with_explicit_arcs() {
        let (c, mut d) = setup("abc\nade\nxyz");
        enforce_node_consistency(&c, &mut d);
        d.retain(1, |w| c.word(w) == "XYZ");

        let mut ac = ArcConsistency::<ArcStack>::new();
        let result = ac.run(&c, &mut d, Some(&[(0, 1)][..])).unwrap();
        assert_eq!(result, Consistency::Consistent);
        assert_eq!(words(&c, &d, 0), vec!["XYZ"]);
    }

    #[test]
    fn test_worklist_order_does_not_change_fixed_point() {
        let structure = "\
#___#
#_##_
#_##_
#_##_
#____
";
        let list = "six\nsat\nsun\nseven\nsixty\nsoups\nnine\nnote\nneat\nfour\nteen\nten\nonce";
        let c = Crossword::from_text(structure, list).unwrap();

        let mut fifo = Domains::new(&c);
        enforce_node_consistency(&c, &mut fifo);
        let mut lifo = fifo.clone();

        let a = ArcConsistency::<ArcQueue>::new().run(&c, &mut fifo, None).unwrap();
        let b = ArcConsistency::<ArcStack>::new().run(&c, &mut lifo, None).unwrap();

        assert_eq!(a.is_consistent(), b.is_consistent());
        assert_eq!(fifo.to_map(&c), lifo.to_map(&c));
    }

    #[test]
    fn test_worklists_deduplicate() {
        let mut q = ArcQueue::default();
        q.push((0, 1));
        q.push((1, 0));
        q.push((0, 1));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some((0, 1)));
        assert_eq!(q.pop(), Some((1, 0)));
        assert!(q.is_empty());

        let mut s = ArcStack::default();
        s.push((0, 1));
        s.push((1, 0));
        s.push((1, 0));
        assert_eq!(s.pop(), Some((1, 0)));
        s.push((1, 0));
        assert_eq!(s.pop(), Some((1, 0)));
        assert_eq!(s.pop(), Some((0, 1)));
        assert_eq!(s.pop(), None);
    }
}
