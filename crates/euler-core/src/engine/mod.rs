//! # Engine Module
//!
//! The problem layer: every solved puzzle is a [`problem::Problem`] descriptor in the
//! [`registry`], solved against a [`context::ProblemContext`] resolved from a
//! [`config::SolveConfig`].
//!
//! - **Configuration** ([`config`]) - data directory and per-problem parameter overrides
//! - **Context** ([`context`]) - resolved parameters and fixture path for one run
//! - **Problems** ([`problem`], [`registry`]) - descriptors, answers and the lookup table
//! - **Progress Monitoring** ([`progress`]) - optional callbacks for long computations
//! - **Error Handling** ([`error`]) - engine-level error type

pub mod config;
pub mod context;
pub mod error;
pub mod problem;
pub(crate) mod problems;
pub mod progress;
pub mod registry;
