//! # Workflows Module
//!
//! Top-level entry points: look problems up in the registry, resolve their
//! parameters and fixtures against a [`crate::engine::config::SolveConfig`], run
//! them and report timed answers.
//!
//! - **Solving** ([`solve`]) - one problem or a batch, with progress events around
//!   each run.

pub mod solve;
