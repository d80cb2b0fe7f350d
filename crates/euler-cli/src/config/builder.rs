use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SettingsArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use eulerlab::engine::config::SolveConfigBuilder;
use std::path::PathBuf;
use tracing::debug;

/// Merges defaults, the config file, `--data-dir` and `--set` values, in that order
/// of increasing precedence.
pub fn build_config(args: &SettingsArgs, set_values: &[String]) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let overrides = file_config.overrides()?;

    let mut builder = SolveConfigBuilder::new()
        .data_dir(
            args.data_dir
                .clone()
                .or(file_config.data_dir)
                .unwrap_or(defaults.data_dir),
        )
        .parameters(overrides);
    builder = apply_set_values(builder, set_values)?;

    let solve_config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Resolved solve configuration: {:?}", solve_config);
    Ok(AppConfig { solve_config })
}

/// `data-dir=PATH` or `pNNN.name=INT`.
fn apply_set_values(
    mut builder: SolveConfigBuilder,
    set_values: &[String],
) -> Result<SolveConfigBuilder> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        if key == "data-dir" {
            builder = builder.data_dir(PathBuf::from(value));
            continue;
        }

        let Some((problem_key, name)) = key.split_once('.') else {
            return Err(CliError::Config(format!(
                "Unsupported configuration key for --set: '{}'",
                key
            )));
        };
        let problem =
            parser::parse_problem_key(problem_key).map_err(|e| CliError::Config(e.to_string()))?;
        let value =
            parser::parse_integer(key, value).map_err(|e| CliError::Config(e.to_string()))?;
        builder = builder.parameter(problem, name, value);
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn set(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let app = build_config(&SettingsArgs::default(), &[]).unwrap();
        assert_eq!(app.solve_config.data_dir, PathBuf::from("data"));
        assert!(app.solve_config.overrides.is_empty());
    }

    #[test]
    fn precedence_is_file_then_flag_then_set() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("euler.toml");
        fs::write(
            &cfg_path,
            r#"
            data-dir = "from-file"

            [parameters.p010]
            limit = 100

            [parameters.p007]
            n = 6
            "#,
        )
        .unwrap();

        let file_only = SettingsArgs {
            config: Some(cfg_path.clone()),
            data_dir: None,
        };
        let app = build_config(&file_only, &[]).unwrap();
        assert_eq!(app.solve_config.data_dir, PathBuf::from("from-file"));
        assert_eq!(app.solve_config.overrides[&10]["limit"], 100);

        let with_flag = SettingsArgs {
            config: Some(cfg_path),
            data_dir: Some(PathBuf::from("from-flag")),
        };
        let app = build_config(&with_flag, &set(&["p010.limit=10"])).unwrap();
        assert_eq!(app.solve_config.data_dir, PathBuf::from("from-flag"));
        assert_eq!(app.solve_config.overrides[&10]["limit"], 10);
        assert_eq!(app.solve_config.overrides[&7]["n"], 6);

        let app = build_config(&with_flag, &set(&["data-dir=from-set"])).unwrap();
        assert_eq!(app.solve_config.data_dir, PathBuf::from("from-set"));
    }

    #[test]
    fn malformed_set_values_are_config_errors() {
        let args = SettingsArgs::default();
        for bad in ["limit=10", "p010.limit", "p010.limit=ten", "x10.limit=1", "threads=4"] {
            let result = build_config(&args, &set(&[bad]));
            assert!(matches!(result, Err(CliError::Config(_))), "{}", bad);
        }
    }
}
