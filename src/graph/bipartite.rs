//! Is Graph Bipartite? (LeetCode 785) — BFS two-coloring.

use std::collections::VecDeque;

pub fn is_bipartite(adj: &[Vec<usize>]) -> bool {
    let n = adj.len();
    let mut color = vec![None; n];

    for start in 0..n {
        if color[start].is_some() {
            continue;
        }
        color[start] = Some(false);
        let mut queue = VecDeque::from([start]);

        while let Some(u) = queue.pop_front() {
            let c = color[u].unwrap_or_default();
            for &v in &adj[u] {
                match color[v] {
                    None => {
                        color[v] = Some(!c);
                        queue.push_back(v);
                    }
                    Some(cv) if cv == c => return false,
                    Some(_) => {}
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_cycle_is_bipartite() {
        let adj = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]];
        assert!(is_bipartite(&adj));
    }

    #[test]
    fn triangle_is_not() {
        let adj = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
        assert!(!is_bipartite(&adj));
    }

    #[test]
    fn disconnected_components_all_checked() {
        // Square plus a separate triangle.
        let adj = vec![
            vec![1, 3],
            vec![0, 2],
            vec![1, 3],
            vec![2, 0],
            vec![5, 6],
            vec![4, 6],
            vec![4, 5],
        ];
        assert!(!is_bipartite(&adj));
    }

    #[test]
    fn empty_graph_is_bipartite() {
        assert!(is_bipartite(&[]));
    }
}
