use super::arith::isqrt;

const MILLER_RABIN_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic primality test for the whole `u64` range.
///
/// Small factors are stripped by trial division; the remainder goes through
/// Miller–Rabin with the first twelve primes as witnesses, which is exact below 2^64.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &MILLER_RABIN_WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &MILLER_RABIN_WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Sieve of Eratosthenes over `0..=limit`.
#[derive(Debug, Clone)]
pub struct Sieve {
    composite: Vec<bool>,
}

impl Sieve {
    pub fn new(limit: usize) -> Self {
        let mut composite = vec![false; limit + 1];
        composite[0] = true;
        if limit >= 1 {
            composite[1] = true;
        }

        let mut p = 2;
        while p * p <= limit {
            if !composite[p] {
                let mut multiple = p * p;
                while multiple <= limit {
                    composite[multiple] = true;
                    multiple += p;
                }
            }
            p += 1;
        }

        Self { composite }
    }

    pub fn limit(&self) -> usize {
        self.composite.len() - 1
    }

    /// Returns `false` for anything above [`Sieve::limit`].
    #[inline]
    pub fn is_prime(&self, n: u64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.composite.get(i))
            .is_some_and(|c| !c)
    }

    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.composite
            .iter()
            .enumerate()
            .filter(|(_, c)| !**c)
            .map(|(i, _)| i as u64)
    }
}

pub fn primes_up_to(limit: u64) -> Vec<u64> {
    Sieve::new(limit as usize).primes().collect()
}

/// Segmented sieve over the closed interval `[lo, hi]`.
pub fn primes_in_range(lo: u64, hi: u64) -> Vec<u64> {
    if hi < 2 || lo > hi {
        return Vec::new();
    }
    let lo = lo.max(2);
    let base = primes_up_to(isqrt(hi));
    let mut composite = vec![false; (hi - lo + 1) as usize];

    for p in base {
        let first = (p * p).max(lo.div_ceil(p) * p);
        let mut multiple = first;
        while multiple <= hi {
            composite[(multiple - lo) as usize] = true;
            multiple += p;
        }
    }

    composite
        .iter()
        .enumerate()
        .filter(|(_, c)| !**c)
        .map(|(i, _)| lo + i as u64)
        .collect()
}

/// The `n`-th prime, 1-based. `None` when `n == 0`.
pub fn nth_prime(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    // p_n < n (ln n + ln ln n) for n >= 6
    let bound = if n < 6 {
        15
    } else {
        let nf = n as f64;
        (nf * (nf.ln() + nf.ln().ln())).ceil() as usize
    };
    Sieve::new(bound).primes().nth(n - 1)
}

/// Prime factorization by trial division, ascending, with multiplicities.
pub fn prime_factors(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut push = |n: &mut u64, p: u64| {
        let mut k = 0;
        while *n % p == 0 {
            *n /= p;
            k += 1;
        }
        if k > 0 {
            factors.push((p, k));
        }
    };

    push(&mut n, 2);
    let mut p = 3;
    while p * p <= n {
        push(&mut n, p);
        p += 2;
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

pub fn largest_prime_factor(n: u64) -> Option<u64> {
    prime_factors(n).last().map(|&(p, _)| p)
}

/// Euler's totient from the factorization of `n`.
pub fn totient(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    prime_factors(n)
        .iter()
        .fold(n, |acc, &(p, _)| acc / p * (p - 1))
}

/// φ(k) for every `k` in `0..=limit`.
pub fn totient_sieve(limit: usize) -> Vec<u64> {
    let mut phi: Vec<u64> = (0..=limit as u64).collect();
    for p in 2..=limit {
        if phi[p] == p as u64 {
            let mut multiple = p;
            while multiple <= limit {
                phi[multiple] -= phi[multiple] / p as u64;
                multiple += p;
            }
        }
    }
    phi
}

/// Number of distinct prime factors ω(k) for every `k` in `0..=limit`.
pub fn distinct_factor_counts(limit: usize) -> Vec<u8> {
    let mut counts = vec![0u8; limit + 1];
    for p in 2..=limit {
        if counts[p] == 0 {
            let mut multiple = p;
            while multiple <= limit {
                counts[multiple] += 1;
                multiple += p;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_prime_handles_small_values() {
        let expected: Vec<u64> = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        let found: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn is_prime_rejects_strong_pseudoprimes() {
        assert!(!is_prime(3_215_031_751));
        assert!(!is_prime(341_550_071_728_321));
        assert!(!is_prime(561));
    }

    #[test]
    fn is_prime_accepts_large_primes() {
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(18_446_744_073_709_551_557));
        assert!(!is_prime(u64::MAX));
    }

    #[test]
    fn sieve_agrees_with_miller_rabin() {
        let sieve = Sieve::new(10_000);
        for n in 0..=10_000u64 {
            assert_eq!(sieve.is_prime(n), is_prime(n), "disagreement at {n}");
        }
        assert!(!sieve.is_prime(10_007));
    }

    #[test]
    fn sieve_handles_tiny_limits() {
        assert_eq!(Sieve::new(0).primes().count(), 0);
        assert_eq!(Sieve::new(1).primes().count(), 0);
        assert_eq!(Sieve::new(2).primes().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn primes_in_range_matches_full_sieve() {
        let full: Vec<u64> = primes_up_to(5_000)
            .into_iter()
            .filter(|&p| p >= 1_000)
            .collect();
        assert_eq!(primes_in_range(1_000, 5_000), full);
        assert_eq!(primes_in_range(0, 10), vec![2, 3, 5, 7]);
        assert!(primes_in_range(10, 5).is_empty());
    }

    #[test]
    fn nth_prime_is_one_based() {
        assert_eq!(nth_prime(0), None);
        assert_eq!(nth_prime(1), Some(2));
        assert_eq!(nth_prime(6), Some(13));
        assert_eq!(nth_prime(10_001), Some(104_743));
    }

    #[test]
    fn prime_factors_multiply_back() {
        for n in 2..2_000u64 {
            let product: u64 = prime_factors(n).iter().map(|&(p, k)| p.pow(k)).product();
            assert_eq!(product, n);
        }
        assert_eq!(prime_factors(360), vec![(2, 3), (3, 2), (5, 1)]);
        assert!(prime_factors(1).is_empty());
    }

    #[test]
    fn largest_prime_factor_returns_none_below_two() {
        assert_eq!(largest_prime_factor(0), None);
        assert_eq!(largest_prime_factor(1), None);
        assert_eq!(largest_prime_factor(13_195), Some(29));
    }

    #[test]
    fn totient_sieve_matches_direct_totient() {
        let phi = totient_sieve(1_000);
        for n in 0..=1_000u64 {
            assert_eq!(phi[n as usize], totient(n));
        }
        assert_eq!(totient(87_109), 79_180);
    }

    #[test]
    fn distinct_factor_counts_counts_each_prime_once() {
        let counts = distinct_factor_counts(700);
        assert_eq!(counts[644], 3);
        assert_eq!(counts[645], 3);
        assert_eq!(counts[646], 3);
        assert_eq!(counts[1], 0);
        assert_eq!(counts[64], 1);
    }
}
