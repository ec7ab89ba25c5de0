//! Maximal Rectangle (LeetCode 85): largest all-true rectangle in a
//! boolean matrix. Each row extends a histogram of column heights; the
//! best rectangle in each histogram falls out of a monotonic stack.

pub fn maximal_rectangle(matrix: &[Vec<bool>]) -> usize {
    let cols = matrix.first().map_or(0, Vec::len);
    let mut heights = vec![0usize; cols];
    let mut best = 0;

    for row in matrix {
        for (h, &filled) in heights.iter_mut().zip(row) {
            *h = if filled { *h + 1 } else { 0 };
        }
        best = best.max(largest_in_histogram(&heights));
    }
    best
}

/// Largest Rectangle in Histogram (LeetCode 84).
pub fn largest_in_histogram(heights: &[usize]) -> usize {
    // Stack of indices with strictly increasing heights.
    let mut stack: Vec<usize> = Vec::with_capacity(heights.len());
    let mut best = 0;

    for i in 0..=heights.len() {
        let current = heights.get(i).copied().unwrap_or(0);
        while matches!(stack.last(), Some(&top) if heights[top] >= current) {
            let height = heights[stack.pop().unwrap_or_default()];
            let width = match stack.last() {
                Some(&left) => i - left - 1,
                None => i,
            };
            best = best.max(height * width);
        }
        stack.push(i);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_sample() {
        assert_eq!(largest_in_histogram(&[2, 1, 5, 6, 2, 3]), 10);
        assert_eq!(largest_in_histogram(&[]), 0);
        assert_eq!(largest_in_histogram(&[4]), 4);
    }

    #[test]
    fn leetcode_sample() {
        let t = true;
        let f = false;
        let matrix = vec![
            vec![t, f, t, f, f],
            vec![t, f, t, t, t],
            vec![t, t, t, t, t],
            vec![t, f, f, t, f],
        ];
        assert_eq!(maximal_rectangle(&matrix), 6);
    }

    #[test]
    fn all_false() {
        let matrix = vec![vec![false; 3]; 3];
        assert_eq!(maximal_rectangle(&matrix), 0);
    }

    #[test]
    fn full_matrix() {
        let matrix = vec![vec![true; 4]; 2];
        assert_eq!(maximal_rectangle(&matrix), 8);
    }
}
