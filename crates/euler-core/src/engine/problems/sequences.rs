use crate::core::math::combinatorics::{count_binomials_exceeding, lattice_paths};
use crate::core::math::sequences::{Fibonacci, collatz_length, hexagonal, is_pentagonal, pentagonal};
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Parameter, Problem};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::debug;

pub(crate) const P002: Problem = Problem {
    id: 2,
    title: "Even Fibonacci numbers",
    fixture: None,
    parameters: &[Parameter::new("limit", 4_000_000, "inclusive bound on the terms")],
    solve: even_fibonacci,
};

pub(crate) const P014: Problem = Problem {
    id: 14,
    title: "Longest Collatz sequence",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000_000, "exclusive bound on the starting number")],
    solve: longest_collatz,
};

pub(crate) const P015: Problem = Problem {
    id: 15,
    title: "Lattice paths",
    fixture: None,
    parameters: &[Parameter::new("size", 20, "side length of the square grid")],
    solve: lattice_paths_through_grid,
};

pub(crate) const P044: Problem = Problem {
    id: 44,
    title: "Pentagon numbers",
    fixture: None,
    parameters: &[],
    solve: pentagon_numbers,
};

pub(crate) const P045: Problem = Problem {
    id: 45,
    title: "Triangular, pentagonal, and hexagonal",
    fixture: None,
    parameters: &[Parameter::new("start", 144, "first hexagonal index to examine")],
    solve: triangular_pentagonal_hexagonal,
};

pub(crate) const P053: Problem = Problem {
    id: 53,
    title: "Combinatoric selections",
    fixture: None,
    parameters: &[
        Parameter::new("max-n", 100, "largest n of C(n, r)"),
        Parameter::new("bound", 1_000_000, "values strictly above this are counted"),
    ],
    solve: combinatoric_selections,
};

const COLLATZ_REPORT_EVERY: u64 = 10_000;

fn even_fibonacci(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_u64("limit")?;
    let sum: u64 = Fibonacci::new()
        .take_while(|&f| f <= limit)
        .filter(|f| f % 2 == 0)
        .sum();
    Ok(Answer::from(sum))
}

fn longest_collatz(ctx: &ProblemContext, reporter: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_at_least("limit", 2)?;
    let mut cache = vec![0u32; limit as usize];
    reporter.report(Progress::TaskStart {
        total_steps: limit.div_ceil(COLLATZ_REPORT_EVERY),
    });

    let mut best = (1u64, 1u32);
    for n in 1..limit {
        let length = collatz_length(n, &mut cache);
        if length > best.1 {
            best = (n, length);
        }
        if n % COLLATZ_REPORT_EVERY == 0 {
            reporter.report(Progress::TaskIncrement);
        }
    }
    reporter.report(Progress::TaskFinish);

    debug!("Collatz chain of {} has {} terms", best.0, best.1);
    Ok(Answer::from(best.0))
}

fn lattice_paths_through_grid(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let size = ctx.param_u64("size")?;
    let paths = lattice_paths(size, size)
        .and_then(|p| i64::try_from(p).ok())
        .ok_or_else(|| ctx.invalid("size", "path count overflows i64"))?;
    Ok(Answer::Integer(paths))
}

/// Finds the pair `P(j) < P(k)` whose sum and difference are pentagonal with the
/// smallest difference.
///
/// For fixed `k` the difference grows as `j` falls, and the closest pair at `k` is
/// `3k − 2` apart, so both loops stop as soon as they cannot improve on the best.
fn pentagon_numbers(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let mut best: Option<u64> = None;
    for k in 2u64.. {
        if best.is_some_and(|b| 3 * k - 2 >= b) {
            break;
        }
        let pk = pentagonal(k);
        for j in (1..k).rev() {
            let pj = pentagonal(j);
            let diff = pk - pj;
            if best.is_some_and(|b| diff >= b) {
                break;
            }
            if is_pentagonal(diff) && is_pentagonal(pk + pj) {
                debug!("P({}) - P({}) = {}", k, j, diff);
                best = Some(diff);
            }
        }
    }
    best.map(Answer::from)
        .ok_or_else(|| ctx.no_solution("pentagonal numbers exhausted"))
}

/// Every hexagonal number is triangular, so only pentagonality needs checking.
fn triangular_pentagonal_hexagonal(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let start = ctx.param_at_least("start", 1)?;
    (start..)
        .map(hexagonal)
        .find(|&h| is_pentagonal(h))
        .map(Answer::from)
        .ok_or_else(|| ctx.no_solution("hexagonal numbers exhausted"))
}

fn combinatoric_selections(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let max_n = ctx.param_usize("max-n")?;
    let bound = ctx.param_u64("bound")?;
    Ok(Answer::from(count_binomials_exceeding(max_n, bound)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::problems::test_support::{context_with, solve_default, solve_with};
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn even_fibonacci_matches_known_answers() {
        assert_eq!(solve_with(&P002, &[("limit", 100)]), Answer::Integer(44));
        assert_eq!(solve_default(&P002), Answer::Integer(4_613_732));
    }

    #[test]
    fn longest_collatz_small_limit() {
        assert_eq!(solve_with(&P014, &[("limit", 10)]), Answer::Integer(9));
    }

    #[test]
    fn longest_collatz_matches_known_answer() {
        assert_eq!(solve_default(&P014), Answer::Integer(837_799));
    }

    #[test]
    fn longest_collatz_reports_progress() {
        let increments = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            if let Progress::TaskIncrement = event {
                increments.fetch_add(1, Ordering::Relaxed);
            }
        }));
        let ctx = context_with(&P014, &[("limit", 50_000)]);
        (P014.solve)(&ctx, &reporter).unwrap();
        drop(reporter);
        assert_eq!(increments.into_inner(), 4);
    }

    #[test]
    fn lattice_paths_matches_known_answers() {
        assert_eq!(solve_with(&P015, &[("size", 2)]), Answer::Integer(6));
        assert_eq!(solve_default(&P015), Answer::Integer(137_846_528_820));
    }

    #[test]
    fn pentagon_numbers_matches_known_answer() {
        assert_eq!(solve_default(&P044), Answer::Integer(5_482_660));
    }

    #[test]
    fn triangular_pentagonal_hexagonal_finds_successive_terms() {
        assert_eq!(solve_with(&P045, &[("start", 2)]), Answer::Integer(40_755));
        assert_eq!(solve_default(&P045), Answer::Integer(1_533_776_805));
    }

    #[test]
    fn combinatoric_selections_matches_known_answers() {
        assert_eq!(solve_with(&P053, &[("max-n", 23)]), Answer::Integer(4));
        assert_eq!(solve_default(&P053), Answer::Integer(4_075));
    }
}
