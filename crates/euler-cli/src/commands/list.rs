use crate::cli::{ListArgs, SettingsArgs};
use crate::config::build_config;
use crate::error::Result;
use eulerlab::engine::problem::Problem;
use eulerlab::engine::registry;
use std::path::Path;

pub fn run(args: ListArgs, settings: &SettingsArgs) -> Result<()> {
    let app = build_config(settings, &[])?;
    let data_dir = &app.solve_config.data_dir;

    for problem in registry::registry()
        .iter()
        .filter(|p| !args.fixtures || p.fixture.is_some())
    {
        println!("{}", describe(problem, data_dir));
    }
    Ok(())
}

/// One line per problem: id, title, then either the fixture and whether it is present
/// or the tunable parameters with their defaults.
pub fn describe(problem: &Problem, data_dir: &Path) -> String {
    let detail = match problem.fixture {
        Some(name) => {
            let status = if data_dir.join(name).is_file() {
                "found"
            } else {
                "missing"
            };
            format!("[{}: {}]", name, status)
        }
        None => problem
            .parameters
            .iter()
            .map(|p| format!("{}={}", p.name, p.default))
            .collect::<Vec<_>>()
            .join(" "),
    };
    format!("{:>4}  {:<40} {}", problem.id, problem.title, detail)
        .trim_end()
        .to_string()
}
