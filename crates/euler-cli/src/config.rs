//! Configuration resolution for the CLI: defaults, then the TOML file, then
//! command-line flags, then `--set` values.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::AppConfig;
