use super::config::ConfigError;
use crate::core::io::FixtureError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown problem: {0}")]
    UnknownProblem(u32),

    #[error("Fixture '{name}' for problem {problem} not found at {path}", path = path.display())]
    FixtureNotFound {
        problem: u32,
        name: &'static str,
        path: PathBuf,
    },

    #[error("Failed to read fixture {path}: {source}", path = path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: FixtureError,
    },

    #[error("Invalid parameter '{name}' for problem {problem}: {reason}")]
    InvalidParameter {
        problem: u32,
        name: String,
        reason: String,
    },

    #[error("Problem {problem} has no solution: {reason}")]
    NoSolution { problem: u32, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
