use crate::core::math::arith::{divisor_count, divisor_sum_sieve, lcm, proper_divisor_sum};
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Parameter, Problem};
use crate::engine::progress::ProgressReporter;
use tracing::debug;

pub(crate) const P005: Problem = Problem {
    id: 5,
    title: "Smallest multiple",
    fixture: None,
    parameters: &[Parameter::new("n", 20, "divisible by every number in 1..=n")],
    solve: smallest_multiple,
};

pub(crate) const P012: Problem = Problem {
    id: 12,
    title: "Highly divisible triangular number",
    fixture: None,
    parameters: &[Parameter::new("divisors", 500, "strict lower bound on the divisor count")],
    solve: highly_divisible_triangle,
};

pub(crate) const P021: Problem = Problem {
    id: 21,
    title: "Amicable numbers",
    fixture: None,
    parameters: &[Parameter::new("limit", 10_000, "exclusive upper bound")],
    solve: amicable_numbers,
};

pub(crate) const P023: Problem = Problem {
    id: 23,
    title: "Non-abundant sums",
    fixture: None,
    parameters: &[Parameter::new(
        "limit",
        28_123,
        "every integer above this is a sum of two abundant numbers",
    )],
    solve: non_abundant_sums,
};

fn smallest_multiple(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let n = ctx.param_u64("n")?;
    (1..=n)
        .try_fold(1u64, lcm)
        .map(Answer::from)
        .ok_or_else(|| ctx.invalid("n", "the least common multiple overflows u64"))
}

/// `T(n) = n(n + 1) / 2` splits into two coprime factors, so its divisor count is the
/// product of theirs.
fn highly_divisible_triangle(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let target = ctx.param_u64("divisors")?;
    let (n, count) = (1u64..)
        .map(|n| {
            let count = if n % 2 == 0 {
                divisor_count(n / 2) * divisor_count(n + 1)
            } else {
                divisor_count(n) * divisor_count((n + 1) / 2)
            };
            (n, count)
        })
        .find(|&(_, count)| count > target)
        .ok_or_else(|| ctx.no_solution("triangle numbers exhausted"))?;
    debug!("T({}) has {} divisors", n, count);
    Ok(Answer::from(n * (n + 1) / 2))
}

fn amicable_numbers(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_usize("limit")?;
    let sums = divisor_sum_sieve(limit);

    let partner_sum = |b: u64| -> u64 {
        sums.get(b as usize)
            .copied()
            .unwrap_or_else(|| proper_divisor_sum(b))
    };

    let total: u64 = (2..limit as u64)
        .filter(|&a| {
            let b = sums[a as usize];
            b != a && partner_sum(b) == a
        })
        .sum();
    Ok(Answer::from(total))
}

fn non_abundant_sums(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_usize("limit")?;
    let sums = divisor_sum_sieve(limit);
    let abundant: Vec<usize> = (1..=limit).filter(|&n| sums[n] > n as u64).collect();

    let mut expressible = vec![false; limit + 1];
    for (i, &a) in abundant.iter().enumerate() {
        for &b in &abundant[i..] {
            let s = a + b;
            if s > limit {
                break;
            }
            expressible[s] = true;
        }
    }

    let total: u64 = (1..=limit)
        .filter(|&n| !expressible[n])
        .map(|n| n as u64)
        .sum();
    Ok(Answer::from(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::problems::test_support::{solve_default, solve_with};

    #[test]
    fn smallest_multiple_matches_known_answers() {
        assert_eq!(solve_with(&P005, &[("n", 10)]), Answer::Integer(2_520));
        assert_eq!(solve_default(&P005), Answer::Integer(232_792_560));
    }

    #[test]
    fn highly_divisible_triangle_matches_known_answers() {
        assert_eq!(solve_with(&P012, &[("divisors", 5)]), Answer::Integer(28));
        assert_eq!(solve_default(&P012), Answer::Integer(76_576_500));
    }

    #[test]
    fn amicable_numbers_matches_known_answers() {
        assert_eq!(solve_with(&P021, &[("limit", 300)]), Answer::Integer(504));
        assert_eq!(solve_default(&P021), Answer::Integer(31_626));
    }

    #[test]
    fn non_abundant_sums_matches_known_answer() {
        assert_eq!(solve_default(&P023), Answer::Integer(4_179_871));
    }
}
