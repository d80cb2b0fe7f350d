/// `C(n, k)` computed multiplicatively; `None` on overflow.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(acc)
}

/// Rows of Pascal's triangle up to `max_n`, saturating at `cap`.
///
/// Entries never exceed `cap + 1`, so arbitrarily large rows stay in range.
pub fn pascal_saturating(max_n: usize, cap: u64) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = Vec::with_capacity(max_n + 1);
    let ceiling = cap.saturating_add(1);
    for n in 0..=max_n {
        let mut row = vec![1u64; n + 1];
        for k in 1..n {
            let prev = &rows[n - 1];
            row[k] = prev[k - 1].saturating_add(prev[k]).min(ceiling);
        }
        rows.push(row);
    }
    rows
}

/// Counts the `(n, k)` pairs with `n <= max_n` whose binomial coefficient exceeds `bound`.
pub fn count_binomials_exceeding(max_n: usize, bound: u64) -> usize {
    pascal_saturating(max_n, bound)
        .iter()
        .flatten()
        .filter(|&&v| v > bound)
        .count()
}

/// Monotone lattice paths through a `width × height` grid of squares.
pub fn lattice_paths(width: u64, height: u64) -> Option<u128> {
    binomial(width + height, width)
}
