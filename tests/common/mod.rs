//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use crossword_solver::csp::assignment::{Assignment, Solution};
use crossword_solver::csp::crossword::Crossword;
use crossword_solver::csp::dictionary::Dictionary;
use crossword_solver::csp::structure::Structure;

/// Routes the library's `log` output to the test harness. Run with
/// `RUST_LOG=trace` to see every decision.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small random puzzle: a grid of up to `max_side x max_side` cells, a
/// three-letter alphabet and a handful of words. Half of the puzzles get a
/// planted fill so that both outcomes are well represented.
pub fn random_puzzle(rng: &mut fastrand::Rng, max_side: usize) -> Crossword {
    let height = rng.usize(2..=max_side);
    let width = rng.usize(2..=max_side);
    let rows: Vec<Vec<bool>> = (0..height)
        .map(|_| (0..width).map(|_| rng.u8(..10) < 7).collect())
        .collect();
    let structure = Structure::new(&rows).unwrap();

    let bare = Crossword::new(structure.clone(), Dictionary::default());
    let lengths: Vec<usize> = bare.variables().iter().map(|var| var.length).collect();

    let mut words: Vec<String> = Vec::new();
    if rng.bool() {
        let grid: Vec<Vec<char>> = (0..height)
            .map(|_| (0..width).map(|_| letter(rng)).collect())
            .collect();
        words.extend(
            bare.variables()
                .iter()
                .map(|var| var.cells().map(|(i, j)| grid[i][j]).collect::<String>()),
        );
    }

    for _ in 0..rng.usize(2..=5) {
        let len = if lengths.is_empty() || rng.u8(..4) == 0 {
            rng.usize(1..=width.max(height))
        } else {
            lengths[rng.usize(..lengths.len())]
        };
        words.push((0..len).map(|_| letter(rng)).collect());
    }

    Crossword::new(structure, Dictionary::new(words))
}

fn letter(rng: &mut fastrand::Rng) -> char {
    char::from(b'A' + rng.u8(..3))
}

/// Every solution, found by trying each word in each variable in turn.
pub fn brute_force(crossword: &Crossword) -> Vec<Solution> {
    let mut found = Vec::new();
    let mut assignment = Assignment::new(crossword.num_vars());
    enumerate(crossword, &mut assignment, 0, &mut found);
    found
}

fn enumerate(
    crossword: &Crossword,
    assignment: &mut Assignment,
    var: usize,
    found: &mut Vec<Solution>,
) {
    if var == crossword.num_vars() {
        found.push(assignment.to_solution(crossword));
        return;
    }
    for word in 0..crossword.dictionary().len() {
        assignment.assign(var, word);
        if assignment.is_consistent(crossword) {
            enumerate(crossword, assignment, var + 1, found);
        }
        assignment.unassign(var);
    }
}
