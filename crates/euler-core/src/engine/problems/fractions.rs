use crate::core::math::farey::{Fraction, count_between, left_neighbor};
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Parameter, Problem};
use crate::engine::progress::ProgressReporter;
use tracing::debug;

pub(crate) const P071: Problem = Problem {
    id: 71,
    title: "Ordered fractions",
    fixture: None,
    parameters: &[
        Parameter::new("num", 3, "numerator of the target fraction"),
        Parameter::new("den", 7, "denominator of the target fraction"),
        Parameter::new("order", 1_000_000, "largest denominator"),
    ],
    solve: ordered_fractions,
};

pub(crate) const P073: Problem = Problem {
    id: 73,
    title: "Counting fractions in a range",
    fixture: None,
    parameters: &[Parameter::new("order", 12_000, "largest denominator")],
    solve: fractions_in_range,
};

fn ordered_fractions(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let num = ctx.param_at_least("num", 1)?;
    let den = ctx.param_at_least("den", 1)?;
    let order = ctx.param_at_least("order", 1)?;
    if num > den {
        return Err(ctx.invalid("num", "target must not exceed 1"));
    }
    let target = Fraction::new(num, den);
    let neighbor = left_neighbor(target, order)
        .ok_or_else(|| ctx.no_solution(format!("nothing lies below {}", target)))?;
    debug!("left neighbour of {} at order {} is {}", target, order, neighbor);
    Ok(Answer::from(neighbor.num))
}

fn fractions_in_range(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let order = ctx.param_at_least("order", 3)?;
    let count = count_between(Fraction::new(1, 3), Fraction::new(1, 2), order);
    Ok(Answer::from(count))
}
