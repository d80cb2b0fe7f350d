//! # Graph Module
//!
//! Number grids viewed as weighted directed graphs, plus the dynamic-programming path
//! search over number triangles.
//!
//! - [`grid`] - rectangular matrices and their conversion to adjacency lists
//! - [`dijkstra`] - multi-source shortest paths over those adjacency lists
//! - [`triangle`] - maximum top-to-bottom path sums

pub mod dijkstra;
pub mod grid;
pub mod triangle;

pub use dijkstra::Graph;
pub use grid::{End, Grid, GridError, Moves, Start};
