#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The grid model: structure, word list and everything derived from them.
//!
//! A [`Crossword`] is built once and never changes afterwards. Construction
//! derives:
//!
//! - the variables, one per maximal run of at least two fillable cells in
//!   each direction, sorted so that their index ([`VarId`]) gives a stable
//!   iteration order;
//! - the overlaps, recording for each ordered pair of crossing variables which
//!   letter of each must agree;
//! - the neighbour lists, i.e. the variables each variable crosses.

use crate::csp::assignment::Solution;
use crate::csp::dictionary::{Dictionary, WordId};
use crate::csp::error::Result;
use crate::csp::structure::Structure;
use crate::csp::variable::{Direction, VarId, Variable};
use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// The letter positions `(k1, k2)` at which two variables cross: letter `k1`
/// of the first variable's word must equal letter `k2` of the second's.
pub type Overlap = (usize, usize);

/// Neighbour list of a single variable. Real grids rarely cross a slot more
/// than a handful of times, so this stays inline.
pub type Neighbors = SmallVec<[VarId; 8]>;

/// An immutable crossword puzzle.
#[derive(Debug, Clone)]
pub struct Crossword {
    structure: Structure,
    dictionary: Dictionary,
    variables: Vec<Variable>,
    index: FxHashMap<Variable, VarId>,
    /// Row-major `n x n` matrix of overlaps.
    overlaps: Vec<Option<Overlap>>,
    neighbors: Vec<Neighbors>,
}

impl Crossword {
    /// Derives the variables, overlaps and neighbours of a puzzle.
    #[must_use]
    pub fn new(structure: Structure, dictionary: Dictionary) -> Self {
        let variables = derive_variables(&structure);
        let n = variables.len();

        let index = variables
            .iter()
            .enumerate()
            .map(|(id, &var)| (var, id))
            .collect();

        let mut overlaps = vec![None; n * n];
        let mut neighbors = vec![Neighbors::new(); n];
        for (x, y) in (0..n).tuple_combinations() {
            if let Some((kx, ky)) = crossing(&variables[x], &variables[y]) {
                overlaps[x * n + y] = Some((kx, ky));
                overlaps[y * n + x] = Some((ky, kx));
                neighbors[x].push(y);
                neighbors[y].push(x);
            }
        }

        debug!(
            "{}x{} grid: {} variables, {} crossings, {} words",
            structure.height(),
            structure.width(),
            n,
            neighbors.iter().map(SmallVec::len).sum::<usize>() / 2,
            dictionary.len()
        );

        Self {
            structure,
            dictionary,
            variables,
            index,
            overlaps,
            neighbors,
        }
    }

    /// Parses a structure and a word list and builds the puzzle.
    ///
    /// See [`Structure::parse`] and [`Dictionary::parse`] for the formats.
    ///
    /// # Errors
    ///
    /// Any configuration error raised while parsing the structure.
    pub fn from_text(structure: &str, words: &str) -> Result<Self> {
        Ok(Self::new(
            Structure::parse(structure)?,
            Dictionary::parse(words),
        ))
    }

    /// The cell layout.
    #[must_use]
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    /// The candidate words.
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.structure.height()
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.structure.width()
    }

    /// All variables, indexed by [`VarId`].
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// The variable with the given id.
    #[must_use]
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id]
    }

    /// Looks up the id of a variable by value.
    #[must_use]
    pub fn id_of(&self, var: &Variable) -> Option<VarId> {
        self.index.get(var).copied()
    }

    /// The word with the given id.
    #[must_use]
    pub fn word(&self, id: WordId) -> &str {
        self.dictionary.word(id)
    }

    /// Overlap between two variables, `None` if they do not cross or are the
    /// same variable.
    #[must_use]
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<Overlap> {
        self.overlaps[x * self.variables.len() + y]
    }

    /// Overlap between two variables given by value.
    #[must_use]
    pub fn overlap_between(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlap(self.id_of(x)?, self.id_of(y)?)
    }

    /// Variables crossing `x`, ascending by id.
    #[must_use]
    pub fn neighbors(&self, x: VarId) -> &[VarId] {
        &self.neighbors[x]
    }

    /// Number of variables crossing `x`.
    #[must_use]
    pub fn degree(&self, x: VarId) -> usize {
        self.neighbors[x].len()
    }

    /// Every ordered pair of crossing variables.
    pub fn arcs(&self) -> impl Iterator<Item = (VarId, VarId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(x, ns)| ns.iter().map(move |&y| (x, y)))
    }

    /// Checks a solution against the puzzle.
    ///
    /// Returns `true` iff every variable is bound, each word has the right
    /// length, no word is used twice, crossing letters agree and every word
    /// is in the dictionary.
    #[must_use]
    pub fn verify(&self, solution: &Solution) -> bool {
        if solution.len() != self.variables.len() {
            return false;
        }

        let mut seen = FxHashSet::default();
        for (var, word) in solution.iter() {
            if self.id_of(var).is_none()
                || word.chars().count() != var.length
                || !self.dictionary.contains(word)
                || !seen.insert(word)
            {
                return false;
            }
        }

        self.arcs().all(|(x, y)| {
            let Some((kx, ky)) = self.overlap(x, y) else {
                return true;
            };
            match (
                solution.get(&self.variables[x]),
                solution.get(&self.variables[y]),
            ) {
                (Some(wx), Some(wy)) => wx.chars().nth(kx) == wy.chars().nth(ky),
                _ => false,
            }
        })
    }
}

/// Finds every maximal run of two or more fillable cells, across then down,
/// and returns them sorted.
fn derive_variables(structure: &Structure) -> Vec<Variable> {
    let mut variables = Vec::new();

    for i in 0..structure.height() {
        for j in 0..structure.width() {
            if !structure.is_fillable(i, j) {
                continue;
            }

            let starts_across = j == 0 || !structure.is_fillable(i, j - 1);
            if starts_across {
                let length = (j..structure.width())
                    .take_while(|&c| structure.is_fillable(i, c))
                    .count();
                if length > 1 {
                    variables.push(Variable::new(i, j, Direction::Across, length));
                }
            }

            let starts_down = i == 0 || !structure.is_fillable(i - 1, j);
            if starts_down {
                let length = (i..structure.height())
                    .take_while(|&r| structure.is_fillable(r, j))
                    .count();
                if length > 1 {
                    variables.push(Variable::new(i, j, Direction::Down, length));
                }
            }
        }
    }

    variables.sort_unstable();
    variables
}

/// Where `a` and `b` share a cell. Runs are maximal, so two slots in the same
/// direction never share one.
fn crossing(a: &Variable, b: &Variable) -> Option<Overlap> {
    let cell = match (a.direction, b.direction) {
        (Direction::Across, Direction::Down) => (a.i, b.j),
        (Direction::Down, Direction::Across) => (b.i, a.j),
        _ => return None,
    };
    Some((a.index_of(cell)?, b.index_of(cell)?))
}
