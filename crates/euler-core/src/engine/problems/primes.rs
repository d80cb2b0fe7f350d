use crate::core::math::arith::{digit_signature, rotations};
use crate::core::math::primes::{
    Sieve, distinct_factor_counts, is_prime, largest_prime_factor, nth_prime, primes_up_to,
};
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Parameter, Problem};
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use std::collections::HashMap;
use tracing::debug;

pub(crate) const P003: Problem = Problem {
    id: 3,
    title: "Largest prime factor",
    fixture: None,
    parameters: &[Parameter::new("n", 600_851_475_143, "number to factor")],
    solve: largest_prime_factor_of,
};

pub(crate) const P007: Problem = Problem {
    id: 7,
    title: "10001st prime",
    fixture: None,
    parameters: &[Parameter::new("n", 10_001, "1-based index of the prime")],
    solve: nth_prime_of,
};

pub(crate) const P010: Problem = Problem {
    id: 10,
    title: "Summation of primes",
    fixture: None,
    parameters: &[Parameter::new("limit", 2_000_000, "exclusive upper bound")],
    solve: sum_of_primes,
};

pub(crate) const P027: Problem = Problem {
    id: 27,
    title: "Quadratic primes",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000, "bound on |a| (exclusive) and |b| (inclusive)")],
    solve: quadratic_primes,
};

pub(crate) const P035: Problem = Problem {
    id: 35,
    title: "Circular primes",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000_000, "exclusive upper bound")],
    solve: circular_primes,
};

pub(crate) const P037: Problem = Problem {
    id: 37,
    title: "Truncatable primes",
    fixture: None,
    parameters: &[],
    solve: truncatable_primes,
};

pub(crate) const P046: Problem = Problem {
    id: 46,
    title: "Goldbach's other conjecture",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000_000, "search ceiling")],
    solve: goldbach_other,
};

pub(crate) const P047: Problem = Problem {
    id: 47,
    title: "Distinct primes factors",
    fixture: None,
    parameters: &[
        Parameter::new("count", 4, "run length and distinct factor count"),
        Parameter::new("limit", 1_000_000, "search ceiling"),
    ],
    solve: distinct_prime_factors,
};

pub(crate) const P049: Problem = Problem {
    id: 49,
    title: "Prime permutations",
    fixture: None,
    parameters: &[Parameter::new("exclude", 1_487, "first term of the known sequence")],
    solve: prime_permutations,
};

pub(crate) const P050: Problem = Problem {
    id: 50,
    title: "Consecutive prime sum",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000_000, "exclusive upper bound")],
    solve: consecutive_prime_sum,
};

fn largest_prime_factor_of(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let n = ctx.param_u64("n")?;
    largest_prime_factor(n)
        .map(Answer::from)
        .ok_or_else(|| ctx.invalid("n", "numbers below 2 have no prime factors"))
}

fn nth_prime_of(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let n = ctx.param_usize("n")?;
    nth_prime(n)
        .map(Answer::from)
        .ok_or_else(|| ctx.invalid("n", "the index is 1-based"))
}

fn sum_of_primes(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_u64("limit")?;
    let sum: u64 = primes_up_to(limit.saturating_sub(1)).iter().sum();
    Ok(Answer::from(sum))
}

fn quadratic_primes(
    ctx: &ProblemContext,
    reporter: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let limit = ctx.param_at_least("limit", 2)? as i64;
    // n = 0 forces b to be prime
    let bs = primes_up_to(limit as u64);
    reporter.report(Progress::TaskStart {
        total_steps: bs.len() as u64,
    });

    let mut best_run = 0u64;
    let mut best_product = 0i64;
    for &b in &bs {
        let b = b as i64;
        for a in (1 - limit)..limit {
            let run = (0i64..)
                .take_while(|&n| {
                    let value = n * n + a * n + b;
                    value > 1 && is_prime(value as u64)
                })
                .count() as u64;
            if run > best_run {
                best_run = run;
                best_product = a * b;
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    debug!("Longest run of {} primes, a·b = {}", best_run, best_product);
    Ok(Answer::Integer(best_product))
}

fn circular_primes(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_u64("limit")?;
    let sieve = Sieve::new(limit.saturating_sub(1) as usize);
    let count = sieve
        .primes()
        .filter(|&p| rotations(p).into_iter().all(is_prime))
        .count();
    Ok(Answer::from(count))
}

/// Right-truncatable primes form a finite tree grown from the one-digit primes by
/// appending digits; the answer keeps those that also truncate from the left.
fn truncatable_primes(_: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let mut frontier: Vec<u64> = vec![2, 3, 5, 7];
    let mut sum = 0u64;
    let mut found = 0;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &p in &frontier {
            for d in [1, 3, 7, 9] {
                let candidate = p * 10 + d;
                if is_prime(candidate) {
                    if is_left_truncatable(candidate) {
                        sum += candidate;
                        found += 1;
                    }
                    next.push(candidate);
                }
            }
        }
        frontier = next;
    }

    debug!("Found {} two-sided truncatable primes", found);
    Ok(Answer::from(sum))
}

fn is_left_truncatable(p: u64) -> bool {
    let mut modulus = 10;
    while modulus < p {
        if !is_prime(p % modulus) {
            return false;
        }
        modulus *= 10;
    }
    true
}

fn goldbach_other(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_u64("limit")?;
    let sieve = Sieve::new(limit as usize);

    (9..=limit)
        .step_by(2)
        .filter(|&n| !sieve.is_prime(n))
        .find(|&n| {
            !(1u64..)
                .map(|k| 2 * k * k)
                .take_while(|&square| square < n)
                .any(|square| sieve.is_prime(n - square))
        })
        .map(Answer::from)
        .ok_or_else(|| ctx.no_solution(format!("no counterexample below {}", limit)))
}

fn distinct_prime_factors(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let count = ctx.param_at_least("count", 1)? as usize;
    let limit = ctx.param_usize("limit")?;
    let omega = distinct_factor_counts(limit);

    let mut run = 0;
    for (n, &factors) in omega.iter().enumerate() {
        if factors as usize == count {
            run += 1;
            if run == count {
                return Ok(Answer::from(n + 1 - count));
            }
        } else {
            run = 0;
        }
    }
    Err(ctx.no_solution(format!("no run of {} found below {}", count, limit)))
}

/// Groups four-digit primes by digit multiset and looks for three-term arithmetic
/// progressions inside each group.
fn prime_permutations(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let exclude = ctx.param_u64("exclude")?;
    let groups: HashMap<[u8; 10], Vec<u64>> = primes_up_to(9_999)
        .into_iter()
        .filter(|&p| p >= 1_000)
        .into_group_map_by(|&p| digit_signature(p));

    let mut sequences: Vec<[u64; 3]> = groups
        .values()
        .filter(|group| group.len() >= 3)
        .flat_map(|group| {
            group
                .iter()
                .tuple_combinations()
                .filter_map(|(&a, &b)| {
                    let c = 2 * b - a;
                    group.contains(&c).then_some([a, b, c])
                })
                .collect::<Vec<_>>()
        })
        .collect();
    sequences.sort_unstable();
    debug!("Arithmetic prime permutation sequences: {:?}", sequences);

    sequences
        .into_iter()
        .find(|seq| seq[0] != exclude)
        .map(|[a, b, c]| Answer::from(a * 100_000_000 + b * 10_000 + c))
        .ok_or_else(|| ctx.no_solution("no other sequence exists"))
}

fn consecutive_prime_sum(
    ctx: &ProblemContext,
    _: &ProgressReporter,
) -> Result<Answer, EngineError> {
    let limit = ctx.param_at_least("limit", 3)?;
    let sieve = Sieve::new((limit - 1) as usize);
    let primes: Vec<u64> = sieve.primes().collect();

    let mut prefix = Vec::with_capacity(primes.len() + 1);
    prefix.push(0u64);
    for &p in &primes {
        prefix.push(prefix[prefix.len() - 1] + p);
    }

    // no window can be longer than the run of smallest primes that stays below the limit
    let max_len = prefix.iter().take_while(|&&s| s < limit).count() - 1;

    for len in (1..=max_len).rev() {
        for start in 0..=primes.len() - len {
            let sum = prefix[start + len] - prefix[start];
            if sum >= limit {
                break;
            }
            if sieve.is_prime(sum) {
                debug!("{} is the sum of {} consecutive primes", sum, len);
                return Ok(Answer::from(sum));
            }
        }
    }
    Err(ctx.no_solution("no prime is a sum of consecutive primes"))
}
