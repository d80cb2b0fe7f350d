pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; `None` on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Exact floor square root.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).is_none_or(|sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    x
}

pub fn is_square(n: u64) -> bool {
    let r = isqrt(n);
    r * r == n
}

/// Number of divisors of `n`, including 1 and `n`.
pub fn divisor_count(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    super::primes::prime_factors(n)
        .iter()
        .map(|&(_, k)| k as u64 + 1)
        .product()
}

/// Sum of the proper divisors of `n`, from its factorization. Zero for `n < 2`.
pub fn proper_divisor_sum(n: u64) -> u64 {
    if n < 2 {
        return 0;
    }
    let sigma: u64 = super::primes::prime_factors(n)
        .iter()
        .map(|&(p, k)| (0..=k).map(|e| p.pow(e)).sum::<u64>())
        .product();
    sigma - n
}

/// Sum of proper divisors for every `k` in `0..=limit`.
pub fn divisor_sum_sieve(limit: usize) -> Vec<u64> {
    let mut sums = vec![0u64; limit + 1];
    for d in 1..=limit / 2 {
        let mut multiple = 2 * d;
        while multiple <= limit {
            sums[multiple] += d as u64;
            multiple += d;
        }
    }
    sums
}

/// Decimal digits, most significant first. `digits(0)` is `[0]`.
pub fn digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

pub fn from_digits(digits: &[u8]) -> u64 {
    digits.iter().fold(0, |acc, &d| acc * 10 + d as u64)
}

/// Digit multiset of `n` as per-digit counts; equal signatures mean digit permutations.
pub fn digit_signature(mut n: u64) -> [u8; 10] {
    let mut counts = [0u8; 10];
    loop {
        counts[(n % 10) as usize] += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    counts
}

#[inline]
pub fn is_digit_permutation(a: u64, b: u64) -> bool {
    digit_signature(a) == digit_signature(b)
}

/// All cyclic digit rotations of `n`, starting with `n` itself.
pub fn rotations(n: u64) -> Vec<u64> {
    let ds = digits(n);
    (0..ds.len())
        .map(|shift| {
            let rotated: Vec<u8> = ds[shift..].iter().chain(&ds[..shift]).copied().collect();
            from_digits(&rotated)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_and_lcm_agree_on_small_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn isqrt_is_exact_near_perfect_squares() {
        for r in [0u64, 1, 2, 3, 1_000, 4_294_967_295] {
            assert_eq!(isqrt(r * r), r);
            if r > 0 {
                assert_eq!(isqrt(r * r - 1), r - 1);
            }
        }
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        assert!(is_square(144));
        assert!(!is_square(145));
    }

    #[test]
    fn divisor_count_matches_triangle_example() {
        assert_eq!(divisor_count(28), 6);
        assert_eq!(divisor_count(1), 1);
        assert_eq!(divisor_count(0), 0);
    }

    #[test]
    fn divisor_sum_sieve_finds_amicable_pair() {
        let sums = divisor_sum_sieve(300);
        assert_eq!(sums[220], 284);
        assert_eq!(sums[284], 220);
        assert_eq!(sums[28], 28);
        assert_eq!(sums[1], 0);
        for n in 0..=300u64 {
            assert_eq!(proper_divisor_sum(n), sums[n as usize]);
        }
    }

    #[test]
    fn digits_round_trip_through_from_digits() {
        assert_eq!(digits(0), vec![0]);
        assert_eq!(digits(1487), vec![1, 4, 8, 7]);
        assert_eq!(from_digits(&[4, 8, 1, 7]), 4817);
    }

    #[test]
    fn digit_permutation_ignores_order_but_not_multiplicity() {
        assert!(is_digit_permutation(87_109, 79_180));
        assert!(!is_digit_permutation(112, 122));
    }

    #[test]
    fn rotations_cycle_through_every_shift() {
        assert_eq!(rotations(197), vec![197, 971, 719]);
        assert_eq!(rotations(7), vec![7]);
    }
}
