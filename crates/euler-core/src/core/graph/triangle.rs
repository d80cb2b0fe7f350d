/// Maximum top-to-bottom path sum through a number triangle.
///
/// Row `i` holds `i + 1` values and each step moves to one of the two adjacent
/// values in the row below. Rows are folded bottom-up, so the work is linear in the
/// number of cells. An empty triangle sums to 0; extra values in a malformed row
/// are ignored.
pub fn max_path_sum(rows: &[Vec<u64>]) -> u64 {
    let Some(last) = rows.last() else {
        return 0;
    };
    let mut best = last.clone();
    for row in rows.iter().rev().skip(1) {
        best = row
            .iter()
            .zip(best.windows(2))
            .map(|(&v, below)| v + below[0].max(below[1]))
            .collect();
    }
    best.first().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_row_example_sums_to_23() {
        let rows = vec![vec![3], vec![7, 4], vec![2, 4, 6], vec![8, 5, 9, 3]];
        assert_eq!(max_path_sum(&rows), 23);
    }

    #[test]
    fn greedy_choice_is_not_always_optimal() {
        let rows = vec![vec![1], vec![2, 1], vec![1, 1, 100]];
        assert_eq!(max_path_sum(&rows), 102);
    }

    #[test]
    fn degenerate_triangles() {
        assert_eq!(max_path_sum(&[]), 0);
        assert_eq!(max_path_sum(&[vec![42]]), 42);
    }
}
