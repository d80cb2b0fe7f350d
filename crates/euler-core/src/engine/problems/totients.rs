use crate::core::math::arith::{is_digit_permutation, isqrt};
use crate::core::math::farey::{Fraction, farey_length};
use crate::core::math::primes::{Sieve, primes_up_to};
use crate::engine::context::ProblemContext;
use crate::engine::error::EngineError;
use crate::engine::problem::{Answer, Parameter, Problem};
use crate::engine::progress::ProgressReporter;
use tracing::debug;

pub(crate) const P069: Problem = Problem {
    id: 69,
    title: "Totient maximum",
    fixture: None,
    parameters: &[Parameter::new("limit", 1_000_000, "inclusive upper bound on n")],
    solve: totient_maximum,
};

pub(crate) const P070: Problem = Problem {
    id: 70,
    title: "Totient permutation",
    fixture: None,
    parameters: &[Parameter::new("limit", 10_000_000, "exclusive upper bound on n")],
    solve: totient_permutation,
};

pub(crate) const P072: Problem = Problem {
    id: 72,
    title: "Counting fractions",
    fixture: None,
    parameters: &[Parameter::new("order", 1_000_000, "largest denominator")],
    solve: counting_fractions,
};

/// `n / φ(n)` is the product of `p / (p − 1)` over the distinct primes of `n`, so the
/// maximum is reached by the largest primorial within the limit.
fn totient_maximum(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_at_least("limit", 2)?;
    let sieve = Sieve::new(64);
    let mut product = 1u64;
    for p in sieve.primes() {
        match product.checked_mul(p) {
            Some(next) if next <= limit => product = next,
            _ => break,
        }
    }
    Ok(Answer::from(product))
}

/// Searches products of two primes near `sqrt(limit)`, which keep `n / φ(n)` small.
///
/// For a fixed smaller factor `p` the ratio only approaches `p / (p − 1)` from above,
/// so the scan stops once that bound cannot beat the best ratio found.
fn totient_permutation(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let limit = ctx.param_at_least("limit", 3)?;
    let primes = primes_up_to(limit / 2);
    let root = isqrt(limit - 1);
    let below_root = primes.partition_point(|&p| p <= root);

    let mut best: Option<(u64, Fraction)> = None;
    for i in (0..below_root).rev() {
        let p = primes[i];
        if best.is_some_and(|(_, ratio)| Fraction::new(p, p - 1) >= ratio) {
            break;
        }
        for &q in &primes[i..] {
            let n = p * q;
            if n >= limit {
                break;
            }
            let phi = if p == q { p * (p - 1) } else { (p - 1) * (q - 1) };
            let ratio = Fraction::new(n, phi);
            if best.is_some_and(|(_, b)| ratio >= b) {
                continue;
            }
            if is_digit_permutation(n, phi) {
                debug!("n = {} = {} x {}, phi = {}", n, p, q, phi);
                best = Some((n, ratio));
            }
        }
    }

    best.map(|(n, _)| Answer::from(n))
        .ok_or_else(|| ctx.no_solution(format!("no semiprime below {} permutes its totient", limit)))
}

/// Terms of the Farey sequence minus its two endpoints.
fn counting_fractions(ctx: &ProblemContext, _: &ProgressReporter) -> Result<Answer, EngineError> {
    let order = ctx.param_at_least("order", 1)?;
    Ok(Answer::from(farey_length(order) - 2))
}
