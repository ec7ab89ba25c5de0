//! Grid DP katas: Unique Paths With Obstacles (LeetCode 63) and Triangle
//! minimum path sum (LeetCode 120).

/// Paths from top-left to bottom-right moving only right/down, where
/// `true` cells are obstacles.
pub fn unique_paths_with_obstacles(grid: &[Vec<bool>]) -> u64 {
    let cols = match grid.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return 0,
    };

    let mut paths = vec![0u64; cols];
    paths[0] = u64::from(!grid[0][0]);

    for row in grid {
        for c in 0..cols {
            if row[c] {
                paths[c] = 0;
            } else if c > 0 {
                paths[c] += paths[c - 1];
            }
        }
    }
    paths[cols - 1]
}

/// Minimum top-to-bottom path sum in a triangle, folding bottom-up into a
/// single row.
pub fn triangle_min_path(triangle: &[Vec<i64>]) -> Option<i64> {
    let last = triangle.last()?;
    let mut best = last.clone();

    for row in triangle.iter().rev().skip(1) {
        for (i, &v) in row.iter().enumerate() {
            best[i] = v + best[i].min(best[i + 1]);
        }
    }
    best.first().copied()
}
