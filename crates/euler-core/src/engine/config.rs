use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameter overrides keyed by problem id, then parameter name.
pub type ParameterOverrides = HashMap<u32, HashMap<String, i64>>;

#[derive(Debug, Clone, PartialEq)]
pub struct SolveConfig {
    /// Directory the fixture files are looked up in.
    pub data_dir: PathBuf,
    pub overrides: ParameterOverrides,
}

impl SolveConfig {
    pub fn overrides_for(&self, problem: u32) -> Option<&HashMap<String, i64>> {
        self.overrides.get(&problem)
    }
}

#[derive(Default)]
pub struct SolveConfigBuilder {
    data_dir: Option<PathBuf>,
    overrides: ParameterOverrides,
}

impl SolveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, path: PathBuf) -> Self {
        self.data_dir = Some(path);
        self
    }

    /// Later calls for the same problem and name replace earlier ones.
    pub fn parameter(mut self, problem: u32, name: impl Into<String>, value: i64) -> Self {
        self.overrides
            .entry(problem)
            .or_default()
            .insert(name.into(), value);
        self
    }

    pub fn parameters(mut self, overrides: ParameterOverrides) -> Self {
        for (problem, values) in overrides {
            self.overrides.entry(problem).or_default().extend(values);
        }
        self
    }

    pub fn build(self) -> Result<SolveConfig, ConfigError> {
        Ok(SolveConfig {
            data_dir: self
                .data_dir
                .ok_or(ConfigError::MissingParameter("data_dir"))?,
            overrides: self.overrides,
        })
    }
}
