#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Crossword filling as a constraint satisfaction problem.
pub mod assignment;
pub mod backtracking;
pub mod crossword;
pub mod dictionary;
pub mod domain;
pub mod error;
pub mod propagation;
pub mod render;
pub mod solver;
pub mod structure;
pub mod trail;
pub mod value_ordering;
pub mod variable;
pub mod variable_selection;
