//! Topological orderings of a DAG.

use std::collections::VecDeque;

/// Kahn's algorithm. Returns `None` when the graph contains a cycle.
pub fn topological_sort(adj: &[Vec<usize>]) -> Option<Vec<usize>> {
    let mut indegree = vec![0; adj.len()];
    for edges in adj {
        for &v in edges {
            indegree[v] += 1;
        }
    }

    let mut queue = VecDeque::new();
    for (i, &d) in indegree.iter().enumerate() {
        if d == 0 {
            queue.push_back(i);
        }
    }

    let mut order = Vec::with_capacity(adj.len());
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    (order.len() == adj.len()).then_some(order)
}

/// All Topological Sorts: enumerates every valid order by backtracking
/// over the zero-indegree frontier. Empty when the graph has a cycle.
pub fn all_topological_orders(adj: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let n = adj.len();
    let mut indegree = vec![0u32; n];
    for edges in adj {
        for &v in edges {
            indegree[v] += 1;
        }
    }

    let mut results = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut taken = vec![false; n];
    enumerate(adj, &mut indegree, &mut taken, &mut current, &mut results);
    results
}

fn enumerate(
    adj: &[Vec<usize>],
    indegree: &mut [u32],
    taken: &mut [bool],
    current: &mut Vec<usize>,
    results: &mut Vec<Vec<usize>>,
) {
    if current.len() == adj.len() {
        results.push(current.clone());
        return;
    }

    for u in 0..adj.len() {
        if taken[u] || indegree[u] != 0 {
            continue;
        }
        taken[u] = true;
        current.push(u);
        for &v in &adj[u] {
            indegree[v] -= 1;
        }

        enumerate(adj, indegree, taken, current, results);

        for &v in &adj[u] {
            indegree[v] += 1;
        }
        current.pop();
        taken[u] = false;
    }
}
