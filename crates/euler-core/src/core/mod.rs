//! # Core Module
//!
//! Stateless algorithms shared by the problem solutions. Nothing in here keeps state
//! between calls; every value is built and discarded inside one computation.
//!
//! - **Number theory** ([`math`]) - primes, totients, divisors, digits, binomials,
//!   figurate numbers, Farey sequences and Pythagorean triples
//! - **Graphs** ([`graph`]) - number grids as weighted graphs, Dijkstra, triangle paths
//! - **Sudoku** ([`sudoku`]) - 9×9 boards and a propagate-then-branch solver
//! - **Geometry** ([`geometry`]) - integer lattice triangles
//! - **Fixture I/O** ([`io`]) - readers for the small text files some problems ship with

pub mod geometry;
pub mod graph;
pub mod io;
pub mod math;
pub mod sudoku;
