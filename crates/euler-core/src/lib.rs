//! # eulerlab Core Library
//!
//! Shared numerical building blocks and solutions for Project Euler style puzzles.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** Stateless math utilities (primes, combinatorics,
//!   sequences, Farey fractions, Pythagorean triples), grid graphs with Dijkstra,
//!   a Sudoku solver, small geometry helpers and readers for the text fixtures some
//!   problems consume.
//!
//! - **[`engine`]: The Problem Layer.** Problem descriptors, the registry of every
//!   solved problem, the solve configuration and the error and progress types.
//!
//! - **[`workflows`]: The Public API.** Resolves problem ids against the registry and
//!   runs them with a given configuration, returning timed solutions.

pub mod core;
pub mod engine;
pub mod workflows;
