//! Farey sequences: reduced fractions in `[0, 1]` with bounded denominators.

use super::arith::gcd;
use super::primes::totient_sieve;
use std::cmp::Ordering;
use std::fmt;

/// A non-negative fraction `num / den` with `den > 0`. Compares by value, so
/// `2/4 == 1/2`.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    pub num: u64,
    pub den: u64,
}

impl Fraction {
    pub const fn new(num: u64, den: u64) -> Self {
        Self { num, den }
    }

    /// `None` when `den == 0`.
    pub fn reduced(num: u64, den: u64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd(num, den).max(1);
        Some(Self::new(num / g, den / g))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num as u128 * other.den as u128).cmp(&(other.num as u128 * self.den as u128))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Iterates the Farey sequence of order `n` in ascending order, from 0/1 to 1/1.
///
/// Each term follows from the previous two: with `k = (n + b) / d`,
/// the successor of `a/b, c/d` is `(k·c − a) / (k·d − b)`.
#[derive(Debug, Clone)]
pub struct FareySequence {
    order: u64,
    prev: Fraction,
    curr: Option<Fraction>,
    started: bool,
}

impl FareySequence {
    pub fn new(order: u64) -> Self {
        let order = order.max(1);
        Self {
            order,
            prev: Fraction::new(0, 1),
            curr: Some(Fraction::new(1, order)),
            started: false,
        }
    }

    /// Starts right after the neighbours `left < right`, which must be adjacent in
    /// the sequence of this order. The first item yielded is `right`.
    pub fn between(order: u64, left: Fraction, right: Fraction) -> Self {
        Self {
            order: order.max(1),
            prev: left,
            curr: Some(right),
            started: true,
        }
    }
}

impl Iterator for FareySequence {
    type Item = Fraction;

    fn next(&mut self) -> Option<Fraction> {
        if !self.started {
            self.started = true;
            return Some(self.prev);
        }
        let curr = self.curr?;
        self.curr = if curr.num == curr.den {
            None
        } else {
            let k = (self.order + self.prev.den) / curr.den;
            Some(Fraction::new(
                k * curr.num - self.prev.num,
                k * curr.den - self.prev.den,
            ))
        };
        self.prev = curr;
        Some(curr)
    }
}

/// The largest fraction with denominator `<= order` strictly below `target`.
///
/// For each denominator `d` the best numerator is `floor((target·d − 1) / target.den)`;
/// the overall winner is the maximum across all `d`, reduced.
pub fn left_neighbor(target: Fraction, order: u64) -> Option<Fraction> {
    let mut best: Option<Fraction> = None;
    for d in 1..=order {
        let scaled = target.num as u128 * d as u128;
        if scaled == 0 {
            continue;
        }
        let n = ((scaled - 1) / target.den as u128) as u64;
        let candidate = Fraction::new(n, d);
        if best.is_none_or(|b| candidate > b) {
            best = Some(candidate);
        }
    }
    best.and_then(|b| Fraction::reduced(b.num, b.den))
}

/// Number of terms in the Farey sequence of order `n`: `1 + Σ φ(k)` for `k` in `1..=n`.
///
/// Order 0 is treated as order 1, as in [`FareySequence::new`].
pub fn farey_length(order: u64) -> u64 {
    1 + totient_sieve(order.max(1) as usize).iter().skip(1).sum::<u64>()
}

/// Reduced fractions strictly between `lo` and `hi` with denominator `<= order`.
///
/// Bounds compare by value and need not belong to the sequence themselves. The walk
/// starts at the first term above `lo` and its predecessor.
pub fn count_between(lo: Fraction, hi: Fraction, order: u64) -> u64 {
    if lo >= hi || order == 0 {
        return 0;
    }
    let Some(right) = successor(lo, order) else {
        return 0;
    };
    let Some(left) = left_neighbor(right, order) else {
        return 0;
    };
    FareySequence::between(order, left, right)
        .take_while(|f| *f < hi)
        .count() as u64
}

/// The smallest term of the Farey sequence of `order` strictly above `f`, reduced.
///
/// For each denominator `d` the smallest numerator above `f` is `floor(f·d) + 1`;
/// candidates above 1 fall outside the sequence.
fn successor(f: Fraction, order: u64) -> Option<Fraction> {
    let mut best: Option<Fraction> = None;
    for d in 1..=order {
        let n = (f.num as u128 * d as u128 / f.den as u128) as u64 + 1;
        if n > d {
            continue;
        }
        let candidate = Fraction::new(n, d);
        if best.is_none_or(|b| candidate < b) {
            best = Some(candidate);
        }
    }
    best.and_then(|b| Fraction::reduced(b.num, b.den))
}
