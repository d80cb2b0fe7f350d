use crate::core::math::triples::perimeter_counts;
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Parameter, Problem};
use crate::engine::progress::ProgressReporter;
use std::cmp::Reverse;
use tracing::debug;

pub(crate) const P039: Problem = Problem {
    id: 39,
    title: "Integer right triangles",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000, "largest perimeter")],
    solve: integer_right_triangles,
};

pub(crate) const P075: Problem = Problem {
    id: 75,
    title: "Singular integer right triangles",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_500_000, "largest wire length")],
    solve: singular_right_triangles,
};

/// The perimeter with the most right triangles; the smallest one on ties.
fn integer_right_triangles(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let limit = ctx.param_u64("limit")?;
    let counts = perimeter_counts(limit);
    let (perimeter, &count) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(p, &c)| (c, Reverse(p)))
        .filter(|&(_, &c)| c > 0)
        .ok_or_else(|| ctx.no_solution(format!("no right triangle has perimeter <= {}", limit)))?;
    debug!("Perimeter {} admits {} triangles", perimeter, count);
    Ok(Answer::from(perimeter))
}

fn singular_right_triangles(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let limit = ctx.param_u64("limit")?;
    let singular = perimeter_counts(limit).iter().filter(|&&c| c == 1).count();
    Ok(Answer::from(singular))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::problems::test_support::{context_with, solve_default, solve_with};

    #[test]
    fn integer_right_triangles_matches_known_answers() {
        assert_eq!(solve_with(&P039, &[("limit", 120)]), Answer::Integer(120));
        assert_eq!(solve_default(&P039), Answer::Integer(840));
    }

    #[test]
    fn integer_right_triangles_below_smallest_perimeter() {
        let ctx = context_with(&P039, &[("limit", 11)]);
        let err = (P039.solve)(&ctx, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::NoSolution { problem: 39, .. }));
    }

    #[test]
    fn singular_right_triangles_matches_known_answers() {
        assert_eq!(solve_with(&P075, &[("limit", 48)]), Answer::Integer(6));
        assert_eq!(solve_default(&P075), Answer::Integer(161_667));
    }
}
