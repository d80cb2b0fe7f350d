//! Pythagorean triples generated with Euclid's formula.

use super::arith::{gcd, isqrt};

/// A right triangle with integer sides, `a < b < c` and `a² + b² = c²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Triple {
    /// Euclid's formula for `m > n > 0`.
    fn from_euclid(m: u64, n: u64) -> Self {
        let x = m * m - n * n;
        let y = 2 * m * n;
        Self {
            a: x.min(y),
            b: x.max(y),
            c: m * m + n * n,
        }
    }

    #[inline]
    pub fn perimeter(&self) -> u64 {
        self.a + self.b + self.c
    }

    pub fn scaled(&self, k: u64) -> Self {
        Self {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
        }
    }

    pub fn is_right(&self) -> bool {
        self.a * self.a + self.b * self.b == self.c * self.c
    }
}

/// Every primitive triple with perimeter `<= max_perimeter`.
///
/// The perimeter of the `(m, n)` triple is `2m(m + n) > 2m²`, which bounds `m` by
/// `sqrt(max_perimeter / 2)`; for fixed `m` it bounds `n` by `max_perimeter / 2m − m`.
pub fn primitive_triples(max_perimeter: u64) -> Vec<Triple> {
    let mut out = Vec::new();
    let m_max = isqrt(max_perimeter / 2);

    for m in 2..=m_max {
        let n_max = (max_perimeter / (2 * m)).saturating_sub(m).min(m - 1);
        // opposite parity: start at 1 for even m, 2 for odd m
        let mut n = if m % 2 == 0 { 1 } else { 2 };
        while n <= n_max {
            if gcd(m, n) == 1 {
                let triple = Triple::from_euclid(m, n);
                if triple.perimeter() <= max_perimeter {
                    out.push(triple);
                }
            }
            n += 2;
        }
    }
    out
}

/// Every triple, primitive or not, with perimeter `<= max_perimeter`.
pub fn triples(max_perimeter: u64) -> Vec<Triple> {
    primitive_triples(max_perimeter)
        .into_iter()
        .flat_map(|t| {
            let p = t.perimeter();
            (1..=max_perimeter / p).map(move |k| t.scaled(k))
        })
        .collect()
}

/// `counts[p]` is the number of distinct triples with perimeter exactly `p`.
pub fn perimeter_counts(max_perimeter: u64) -> Vec<u32> {
    let mut counts = vec![0u32; max_perimeter as usize + 1];
    for t in primitive_triples(max_perimeter) {
        let p = t.perimeter();
        let mut multiple = p;
        while multiple <= max_perimeter {
            counts[multiple as usize] += 1;
            multiple += p;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_triples_under_small_bound() {
        let mut found = primitive_triples(60);
        found.sort();
        let sides: Vec<(u64, u64, u64)> = found.iter().map(|t| (t.a, t.b, t.c)).collect();
        assert_eq!(sides, vec![(3, 4, 5), (5, 12, 13), (7, 24, 25), (8, 15, 17)]);
    }

    #[test]
    fn all_triples_are_right_and_within_bound() {
        for t in triples(500) {
            assert!(t.is_right());
            assert!(t.a < t.b && t.b < t.c);
            assert!(t.perimeter() <= 500);
        }
    }

    #[test]
    fn perimeter_120_has_three_solutions() {
        let counts = perimeter_counts(120);
        assert_eq!(counts[120], 3);
        assert_eq!(counts[12], 1);
        assert_eq!(counts[20], 0);
    }

    #[test]
    fn triples_include_multiples() {
        let found = triples(24);
        assert!(found.contains(&Triple { a: 6, b: 8, c: 10 }));
        assert_eq!(found.len(), 2);
    }
}
