use crate::error::{CliError, Result};
use crate::utils::parser;
use eulerlab::engine::config::ParameterOverrides;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The TOML configuration file.
///
/// ```toml
/// data-dir = "fixtures"
///
/// [parameters.p010]
/// limit = 2_000_000
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub parameters: HashMap<String, HashMap<String, i64>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Re-keys `[parameters.pNNN]` tables by problem id.
    pub fn overrides(&self) -> Result<ParameterOverrides> {
        let mut overrides = ParameterOverrides::new();
        for (key, values) in &self.parameters {
            let id = parser::parse_problem_key(key)
                .map_err(|e| CliError::Config(e.to_string()))?;
            overrides
                .entry(id)
                .or_default()
                .extend(values.iter().map(|(name, &v)| (name.clone(), v)));
        }
        Ok(overrides)
    }
}
