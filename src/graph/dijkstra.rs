//! Shortest paths over weighted adjacency lists.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    position: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest distances; `u64::MAX` marks unreachable nodes.
pub fn dijkstra(adj: &[Vec<(usize, u64)>], start: usize) -> Vec<u64> {
    let mut dist = vec![u64::MAX; adj.len()];
    let mut heap = BinaryHeap::new();

    dist[start] = 0;
    heap.push(State {
        cost: 0,
        position: start,
    });

    while let Some(State { cost, position }) = heap.pop() {
        if cost > dist[position] {
            continue;
        }

        for &(next, weight) in &adj[position] {
            let next_cost = cost + weight;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    position: next,
                });
            }
        }
    }
    dist
}

/// Cheapest Flights Within K Stops (LeetCode 787).
///
/// At most `k` intermediate stops means at most k+1 edges; k+1 rounds of
/// edge relaxation over a frozen snapshot of the previous round.
pub fn cheapest_flight_within_k_stops(
    n: usize,
    flights: &[(usize, usize, u64)],
    src: usize,
    dst: usize,
    k: usize,
) -> Option<u64> {
    let mut dist = vec![u64::MAX; n];
    dist[src] = 0;

    for _ in 0..=k {
        let snapshot = dist.clone();
        for &(from, to, price) in flights {
            if snapshot[from] != u64::MAX && snapshot[from] + price < dist[to] {
                dist[to] = snapshot[from] + price;
            }
        }
    }

    (dist[dst] != u64::MAX).then_some(dist[dst])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_on_small_dag() {
        let adj = vec![vec![(1, 4), (2, 1)], vec![(3, 1)], vec![(1, 2), (3, 5)], vec![]];
        assert_eq!(dijkstra(&adj, 0), vec![0, 3, 1, 4]);
    }

    #[test]
    fn unreachable_stays_max() {
        let adj = vec![vec![(1, 1)], vec![], vec![]];
        assert_eq!(dijkstra(&adj, 0), vec![0, 1, u64::MAX]);
    }

    #[test]
    fn k_stops_sample() {
        // LeetCode 787 sample: 0 -> 2 via 1 costs 300 with one stop, 500 direct.
        let flights = [(0, 1, 100), (1, 2, 100), (0, 2, 500)];
        assert_eq!(cheapest_flight_within_k_stops(3, &flights, 0, 2, 1), Some(200));
        assert_eq!(cheapest_flight_within_k_stops(3, &flights, 0, 2, 0), Some(500));
    }

    #[test]
    fn k_stops_unreachable() {
        let flights = [(0, 1, 10)];
        assert_eq!(cheapest_flight_within_k_stops(3, &flights, 0, 2, 5), None);
    }
}
