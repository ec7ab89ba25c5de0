//! Connecting Cities With Minimum Cost (LeetCode 1135).
//!
//! Cities are numbered 1..=n; each connection is (city1, city2, cost) and
//! bidirectional. Returns the minimum total cost that connects every pair
//! of cities, or `None` when the graph cannot be fully connected.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::union_find::UnionFind;

/// Kruskal: sort edges by cost, union greedily. O(E log E).
pub fn min_connection_cost(n: usize, connections: &[(u32, u32, u64)]) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    if connections.len() + 1 < n {
        return None;
    }

    let mut edges: Vec<&(u32, u32, u64)> = connections.iter().collect();
    edges.sort_by_key(|e| e.2);

    let mut uf = UnionFind::new(n + 1); // 1-indexed
    let mut total = 0;
    let mut used = 0;

    for &(a, b, cost) in edges {
        if uf.union(a as usize, b as usize) {
            total += cost;
            used += 1;
            if used == n - 1 {
                break;
            }
        }
    }

    (used == n - 1).then_some(total)
}

/// Prim: grow the tree from city 1 with a min-heap. O(E log V).
pub fn min_connection_cost_prim(n: usize, connections: &[(u32, u32, u64)]) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }

    let mut adj = vec![Vec::new(); n + 1];
    for &(a, b, cost) in connections {
        adj[a as usize].push((b as usize, cost));
        adj[b as usize].push((a as usize, cost));
    }

    let mut visited = vec![false; n + 1];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u64, 1usize)));

    let mut total = 0;
    let mut reached = 0;

    while let Some(Reverse((cost, city))) = heap.pop() {
        if visited[city] {
            continue;
        }
        visited[city] = true;
        total += cost;
        reached += 1;
        if reached == n {
            return Some(total);
        }
        for &(next, c) in &adj[city] {
            if !visited[next] {
                heap.push(Reverse((c, next)));
            }
        }
    }

    None
}
