use crate::core::sudoku::BoardParseError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: FixtureParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureParseErrorKind {
    #[error("Invalid integer value '{value}'")]
    InvalidInt { value: String },
    #[error("Expected {expected} values, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("Unexpected line outside a block: '{content}'")]
    UnexpectedLine { content: String },
    #[error("Invalid board: {0}")]
    Board(#[from] BoardParseError),
    #[error("Malformed CSV record: {0}")]
    Csv(String),
}

impl FixtureError {
    pub(crate) fn parse(line: usize, kind: FixtureParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }

    pub(crate) fn invalid_int(line: usize, value: &str) -> Self {
        Self::parse(
            line,
            FixtureParseErrorKind::InvalidInt {
                value: value.to_string(),
            },
        )
    }

    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            _ => Self::parse(line, FixtureParseErrorKind::Csv(message)),
        }
    }
}
