use super::arith::isqrt;

/// Fibonacci numbers as an iterator; stops before overflowing `u64`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    /// 1, 2, 3, 5, 8, ...
    pub fn new() -> Self {
        Self::starting_with(1, 2)
    }

    /// 1, 1, 2, 3, 5, ...
    pub fn classic() -> Self {
        Self::starting_with(1, 1)
    }

    fn starting_with(a: u64, b: u64) -> Self {
        Self {
            current: Some(a),
            next: Some(b),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        let following = self.next.and_then(|n| n.checked_add(value));
        self.current = self.next;
        self.next = following;
        Some(value)
    }
}

#[inline]
pub fn triangle(n: u64) -> u64 {
    n * (n + 1) / 2
}

#[inline]
pub fn pentagonal(n: u64) -> u64 {
    n * (3 * n - 1) / 2
}

#[inline]
pub fn hexagonal(n: u64) -> u64 {
    n * (2 * n - 1)
}

/// `x` is triangular iff `8x + 1` is a perfect square.
pub fn is_triangle(x: u64) -> bool {
    let d = 8 * x + 1;
    let r = isqrt(d);
    r * r == d
}

/// `x` is pentagonal iff `24x + 1` is a square whose root is 5 mod 6.
pub fn is_pentagonal(x: u64) -> bool {
    if x == 0 {
        return false;
    }
    let d = 24 * x + 1;
    let r = isqrt(d);
    r * r == d && r % 6 == 5
}

/// Length of the Collatz chain starting at `n`, counting both `n` and the final 1.
///
/// `cache[k]` holds the chain length of `k` once known (0 means unknown). Zero has
/// no chain and yields 0.
pub fn collatz_length(n: u64, cache: &mut [u32]) -> u32 {
    if n == 0 {
        return 0;
    }
    let mut path = Vec::new();
    let mut x = n;
    let base = loop {
        if x == 1 {
            break 1;
        }
        match cache.get(x as usize) {
            Some(&known) if known != 0 => break known,
            _ => {}
        }
        path.push(x);
        x = if x % 2 == 0 { x / 2 } else { 3 * x + 1 };
    };

    let mut length = base;
    for &step in path.iter().rev() {
        length += 1;
        if let Some(slot) = cache.get_mut(step as usize) {
            *slot = length;
        }
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_variants_start_correctly() {
        let ten: Vec<u64> = Fibonacci::new().take(10).collect();
        assert_eq!(ten, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
        let classic: Vec<u64> = Fibonacci::classic().take(5).collect();
        assert_eq!(classic, vec![1, 1, 2, 3, 5]);
    }

    #[test]
    fn fibonacci_terminates_before_overflow() {
        let last = Fibonacci::classic().last().unwrap();
        assert_eq!(last, 12_200_160_415_121_876_738);
    }

    #[test]
    fn figurate_numbers_match_known_terms() {
        assert_eq!(triangle(285), 40_755);
        assert_eq!(pentagonal(165), 40_755);
        assert_eq!(hexagonal(143), 40_755);
        assert!(is_triangle(40_755));
        assert!(is_pentagonal(40_755));
        assert!(!is_pentagonal(40_756));
        assert!(!is_pentagonal(0));
    }

    #[test]
    fn collatz_length_counts_every_term() {
        let mut cache = vec![0u32; 100];
        assert_eq!(collatz_length(13, &mut cache), 10);
        assert_eq!(collatz_length(1, &mut cache), 1);
        assert_eq!(cache[13], 10);
        assert_eq!(cache[40], 9);
    }

    #[test]
    fn collatz_length_of_zero_is_zero() {
        let mut cache = vec![0u32; 10];
        assert_eq!(collatz_length(0, &mut cache), 0);
        assert_eq!(collatz_length(0, &mut []), 0);
        assert!(cache.iter().all(|&c| c == 0));
    }
}
