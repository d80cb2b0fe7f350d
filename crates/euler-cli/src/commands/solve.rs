use crate::cli::{SettingsArgs, SolveArgs};
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::parser;
use crate::utils::progress::CliProgressHandler;
use eulerlab::engine::config::SolveConfig;
use eulerlab::engine::error::EngineError;
use eulerlab::engine::progress::ProgressReporter;
use eulerlab::engine::registry;
use eulerlab::workflows::solve::{self, Solution};
use rayon::prelude::*;
use tracing::{error, info};

pub fn run(args: SolveArgs, settings: &SettingsArgs) -> Result<()> {
    let app = build_config(settings, &args.set_values)?;
    let ids: Vec<u32> = if args.all {
        registry::registry().iter().map(|p| p.id).collect()
    } else {
        parser::parse_id_list(args.ids.as_slice())
            .map_err(|e| CliError::Argument(e.to_string()))?
    };
    for &id in &ids {
        registry::find(id)?;
    }

    let progress = if args.no_progress {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };

    info!("Solving {} problem(s).", ids.len());
    let results = solve_all(&ids, &app.solve_config, &progress);
    progress.finish();

    let mut failed = 0;
    for (id, result) in ids.iter().zip(&results) {
        match result {
            Ok(solution) => println!("{}", format_solution(solution)),
            Err(e) => {
                failed += 1;
                error!("Problem {} failed: {}", id, e);
                eprintln!("Problem {}: error: {}", id, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: ids.len(),
        });
    }
    Ok(())
}

/// One problem runs with detailed progress; several run on the rayon pool behind a
/// single batch bar. Results keep the order of `ids`.
fn solve_all(
    ids: &[u32],
    config: &SolveConfig,
    progress: &CliProgressHandler,
) -> Vec<std::result::Result<Solution, EngineError>> {
    if let [id] = ids {
        let reporter = ProgressReporter::with_callback(progress.get_callback());
        return vec![solve::run_one(*id, config, &reporter)];
    }

    let reporter = ProgressReporter::with_callback(progress.get_batch_callback(ids.len() as u64));
    ids.par_iter()
        .map(|&id| solve::run_one(id, config, &reporter))
        .collect()
}

pub fn format_solution(solution: &Solution) -> String {
    format!(
        "Problem {}: {} ({:.2?})",
        solution.id, solution.answer, solution.elapsed
    )
}
