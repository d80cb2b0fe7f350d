use crate::engine::config::SolveConfig;
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Problem};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::registry;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// The answer to one problem and how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: u32,
    pub title: &'static str,
    pub answer: Answer,
    pub elapsed: Duration,
}

/// Looks up `id` and solves it.
pub fn run_one(
    id: u32,
    config: &SolveConfig,
    reporter: &ProgressReporter,
) -> Result<Solution, EngineError> {
    let problem = registry::find(id)?;
    run_problem(problem, config, reporter)
}

/// Solves every id in order, stopping at the first failure.
pub fn run(
    ids: &[u32],
    config: &SolveConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Solution>, EngineError> {
    let problems = ids
        .iter()
        .map(|&id| registry::find(id))
        .collect::<Result<Vec<_>, _>>()?;
    problems
        .into_iter()
        .map(|problem| run_problem(problem, config, reporter))
        .collect()
}

/// Resolves and solves one problem. `ProblemStart` and `ProblemFinish` bracket the
/// whole run, so a problem whose configuration or fixture fails still finishes.
#[instrument(skip_all, fields(problem = problem.id))]
pub fn run_problem(
    problem: &Problem,
    config: &SolveConfig,
    reporter: &ProgressReporter,
) -> Result<Solution, EngineError> {
    reporter.report(Progress::ProblemStart {
        id: problem.id,
        title: problem.title,
    });
    info!("Solving problem {}: {}", problem.id, problem.title);

    let started = Instant::now();
    let result = ProblemContext::resolve(problem, config)
        .and_then(|context| (problem.solve)(&context, reporter));
    let elapsed = started.elapsed();
    reporter.report(Progress::ProblemFinish { id: problem.id });

    let answer = result?;
    info!("Problem {} solved in {:.2?}", problem.id, elapsed);
    Ok(Solution {
        id: problem.id,
        title: problem.title,
        answer,
        elapsed,
    })
}
