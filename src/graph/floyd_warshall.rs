//! All-pairs shortest paths and the threshold-distance city kata.

/// Floyd-Warshall over an undirected weighted edge list.
///
/// Returns the full distance matrix; `u64::MAX` marks unreachable pairs.
pub fn floyd_warshall(n: usize, edges: &[(usize, usize, u64)]) -> Vec<Vec<u64>> {
    let mut dist = vec![vec![u64::MAX; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0;
    }
    for &(u, v, w) in edges {
        dist[u][v] = dist[u][v].min(w);
        dist[v][u] = dist[v][u].min(w);
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == u64::MAX {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == u64::MAX {
                    continue;
                }
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

/// Find the City With the Smallest Number of Neighbors at a Threshold
/// Distance (LeetCode 1334). Ties break toward the larger city index.
pub fn city_with_fewest_reachable(
    n: usize,
    edges: &[(usize, usize, u64)],
    threshold: u64,
) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let dist = floyd_warshall(n, edges);

    let mut best = 0;
    let mut best_count = usize::MAX;
    for city in 0..n {
        let count = (0..n)
            .filter(|&other| other != city && dist[city][other] <= threshold)
            .count();
        if count <= best_count {
            best_count = count;
            best = city;
        }
    }
    Some(best)
}
