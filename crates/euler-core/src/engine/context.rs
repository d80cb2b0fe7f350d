use super::config::SolveConfig;
use super::error::EngineError;
use super::problem::Problem;
use crate::core::io::FixtureFile;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything one problem run needs: parameter values after overrides and the
/// location of its fixture.
#[derive(Debug, Clone)]
pub struct ProblemContext {
    problem: u32,
    values: HashMap<&'static str, i64>,
    fixture_path: Option<PathBuf>,
}

impl ProblemContext {
    /// Applies the configured overrides on top of the problem's defaults.
    ///
    /// Fails on overrides naming an unknown parameter or when the fixture file is
    /// missing from the data directory.
    pub fn resolve(problem: &Problem, config: &SolveConfig) -> Result<Self, EngineError> {
        let mut values: HashMap<&'static str, i64> = problem
            .parameters
            .iter()
            .map(|p| (p.name, p.default))
            .collect();

        if let Some(overrides) = config.overrides_for(problem.id) {
            for (name, &value) in overrides {
                let param = problem.parameter(name).ok_or_else(|| EngineError::InvalidParameter {
                    problem: problem.id,
                    name: name.clone(),
                    reason: "no such parameter".to_string(),
                })?;
                debug!(
                    "Problem {}: overriding '{}' ({} -> {})",
                    problem.id, param.name, param.default, value
                );
                values.insert(param.name, value);
            }
        }

        let fixture_path = match problem.fixture {
            Some(name) => {
                let path = config.data_dir.join(name);
                if !path.is_file() {
                    return Err(EngineError::FixtureNotFound {
                        problem: problem.id,
                        name,
                        path,
                    });
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            problem: problem.id,
            values,
            fixture_path,
        })
    }

    /// A context with only the given values, for calling solve functions directly.
    pub fn with_values(problem: u32, values: &[(&'static str, i64)]) -> Self {
        Self {
            problem,
            values: values.iter().copied().collect(),
            fixture_path: None,
        }
    }

    pub fn with_fixture(mut self, path: PathBuf) -> Self {
        self.fixture_path = Some(path);
        self
    }

    pub fn problem(&self) -> u32 {
        self.problem
    }

    pub fn param(&self, name: &str) -> Result<i64, EngineError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| self.invalid(name, "parameter is not defined"))
    }

    /// The parameter as `u64`, rejecting negative values.
    pub fn param_u64(&self, name: &str) -> Result<u64, EngineError> {
        let value = self.param(name)?;
        u64::try_from(value).map_err(|_| self.invalid(name, &format!("{} is negative", value)))
    }

    /// The parameter as `usize`, rejecting negative values.
    pub fn param_usize(&self, name: &str) -> Result<usize, EngineError> {
        let value = self.param_u64(name)?;
        usize::try_from(value).map_err(|_| self.invalid(name, &format!("{} is too large", value)))
    }

    /// The parameter as `u64`, rejecting values below `min`.
    pub fn param_at_least(&self, name: &str, min: u64) -> Result<u64, EngineError> {
        let value = self.param_u64(name)?;
        if value < min {
            return Err(self.invalid(name, &format!("{} is below the minimum of {}", value, min)));
        }
        Ok(value)
    }

    pub fn fixture_path(&self) -> Result<&Path, EngineError> {
        self.fixture_path
            .as_deref()
            .ok_or_else(|| EngineError::NoSolution {
                problem: self.problem,
                reason: "no fixture file was resolved".to_string(),
            })
    }

    /// Reads the fixture with the given reader, tagging errors with its path.
    pub fn read_fixture<F: FixtureFile>(&self) -> Result<F::Output, EngineError> {
        let path = self.fixture_path()?;
        debug!("Problem {}: reading fixture {:?}", self.problem, path);
        F::read_from_path(path).map_err(|source| EngineError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn invalid(&self, name: &str, reason: &str) -> EngineError {
        EngineError::InvalidParameter {
            problem: self.problem,
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn no_solution(&self, reason: impl Into<String>) -> EngineError {
        EngineError::NoSolution {
            problem: self.problem,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::SolveConfigBuilder;
    use crate::engine::problem::{Answer, Parameter};
    use crate::engine::progress::ProgressReporter;

    const PARAMS: &[Parameter] = &[Parameter::new("limit", 10, "upper bound")];

    fn noop(_: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
        Ok(Answer::Integer(0))
    }

    fn problem(fixture: Option<&'static str>) -> Problem {
        Problem {
            id: 900,
            title: "Test",
            fixture,
            parameters: PARAMS,
            solve: noop,
        }
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = SolveConfigBuilder::new()
            .data_dir(PathBuf::from("."))
            .build()
            .unwrap();
        let ctx = ProblemContext::resolve(&problem(None), &config).unwrap();
        assert_eq!(ctx.param("limit").unwrap(), 10);
        assert!(ctx.fixture_path().is_err());
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = SolveConfigBuilder::new()
            .data_dir(PathBuf::from("."))
            .parameter(900, "limit", 99)
            .build()
            .unwrap();
        let ctx = ProblemContext::resolve(&problem(None), &config).unwrap();
        assert_eq!(ctx.param_u64("limit").unwrap(), 99);
    }

    #[test]
    fn unknown_override_is_rejected() {
        let config = SolveConfigBuilder::new()
            .data_dir(PathBuf::from("."))
            .parameter(900, "bogus", 1)
            .build()
            .unwrap();
        let err = ProblemContext::resolve(&problem(None), &config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { ref name, .. } if name == "bogus"));
    }

    #[test]
    fn missing_fixture_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = SolveConfigBuilder::new()
            .data_dir(dir.path().to_path_buf())
            .build()
            .unwrap();
        let err = ProblemContext::resolve(&problem(Some("absent.txt")), &config).unwrap_err();
        assert!(matches!(
            err,
            EngineError::FixtureNotFound { name: "absent.txt", .. }
        ));
    }

    #[test]
    fn present_fixture_resolves_inside_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("present.txt"), "1\n").unwrap();
        let config = SolveConfigBuilder::new()
            .data_dir(dir.path().to_path_buf())
            .build()
            .unwrap();
        let ctx = ProblemContext::resolve(&problem(Some("present.txt")), &config).unwrap();
        assert_eq!(ctx.fixture_path().unwrap(), dir.path().join("present.txt"));
    }

    #[test]
    fn negative_values_are_rejected_for_unsigned_access() {
        let ctx = ProblemContext::with_values(900, &[("limit", -5)]);
        assert!(ctx.param_u64("limit").is_err());
        assert_eq!(ctx.param("limit").unwrap(), -5);
        assert!(ctx.param("other").is_err());
    }

    #[test]
    fn minimum_bound_is_enforced() {
        let ctx = ProblemContext::with_values(900, &[("limit", 1)]);
        assert!(ctx.param_at_least("limit", 2).is_err());
        assert_eq!(ctx.param_at_least("limit", 1).unwrap(), 1);
    }
}
