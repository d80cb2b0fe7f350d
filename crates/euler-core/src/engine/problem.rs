use super::context::ProblemContext;
use super::error::EngineError;
use super::progress::ProgressReporter;
use std::fmt;

/// The answer to a problem. Almost always an integer; concatenations of numbers
/// that would overflow `i64` are carried as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Integer(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer(v) => write!(f, "{}", v),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Answer {
    fn from(v: i64) -> Self {
        Answer::Integer(v)
    }
}

impl From<u64> for Answer {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(Answer::Integer)
            .unwrap_or_else(|_| Answer::Text(v.to_string()))
    }
}

impl From<u32> for Answer {
    fn from(v: u32) -> Self {
        Answer::Integer(v as i64)
    }
}

impl From<usize> for Answer {
    fn from(v: usize) -> Self {
        Answer::from(v as u64)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

/// A tunable numeric input of a problem, defaulting to the published value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub default: i64,
    pub description: &'static str,
}

impl Parameter {
    pub const fn new(name: &'static str, default: i64, description: &'static str) -> Self {
        Self {
            name,
            default,
            description,
        }
    }
}

pub type SolveFn = fn(&ProblemContext, &ProgressReporter) -> Result<Answer, EngineError>;

/// Descriptor of one solved problem.
#[derive(Clone, Copy)]
pub struct Problem {
    pub id: u32,
    pub title: &'static str,
    /// File name looked up in the data directory, if the problem reads one.
    pub fixture: Option<&'static str>,
    pub parameters: &'static [Parameter],
    pub solve: SolveFn,
}

impl Problem {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("fixture", &self.fixture)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
