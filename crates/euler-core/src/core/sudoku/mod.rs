//! Classical 9×9 Sudoku: board representation and a solver that alternates
//! constraint propagation with depth-first branching.

pub mod board;
pub mod solver;

pub use board::{Board, BoardParseError};
pub use solver::{SolveStats, Solver};
