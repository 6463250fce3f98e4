//! This crate fills crossword grids from a word list by treating each slot as
//! a variable of a constraint satisfaction problem.
//!
//! ```
//! use crossword_solver::csp::backtracking::Backtracking;
//! use crossword_solver::csp::crossword::Crossword;
//! use crossword_solver::csp::solver::{DefaultConfig, Solver};
//!
//! let crossword = Crossword::from_text("___\n_##\n_##", "abc\nade\nxyz").unwrap();
//! let mut solver = Backtracking::<DefaultConfig>::new(crossword.clone());
//! let solution = solver.solve().unwrap().unwrap();
//!
//! assert!(crossword.verify(&solution));
//! print!("{}", crossword.letter_grid(&solution));
//! ```

/// The `csp` module holds the grid model, the domain store, constraint
/// propagation and backtracking search.
pub mod csp;
