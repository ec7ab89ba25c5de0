//! Maximum flow over a dense capacity matrix.
//!
//! Two classic algorithms over the same network: Edmonds-Karp (shortest
//! augmenting paths by BFS, O(V E^2)) and Dinic's (level graph + blocking
//! flow, O(V^2 E)). Both leave the network untouched; they work on a copy
//! of the residual capacities.

use std::collections::VecDeque;

use tracing::debug;

use super::GraphError;

/// Directed flow network on nodes 0..n with u64 capacities.
#[derive(Clone)]
pub struct FlowNetwork {
    n: usize,
    cap: Vec<Vec<u64>>,
    adj: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cap: vec![vec![0; n]; n],
            adj: vec![Vec::new(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn capacity(&self, u: usize, v: usize) -> u64 {
        self.cap[u][v]
    }

    /// Adds `capacity` on the edge u -> v. Repeated calls accumulate.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: u64) -> Result<(), GraphError> {
        for node in [u, v] {
            if node >= self.n {
                return Err(GraphError::NodeOutOfRange(node, self.n));
            }
        }
        if self.cap[u][v] == 0 && self.cap[v][u] == 0 && u != v {
            self.adj[u].push(v);
            self.adj[v].push(u); // residual arc
        }
        self.cap[u][v] += capacity;
        Ok(())
    }

    fn check_endpoints(&self, source: usize, sink: usize) -> Result<(), GraphError> {
        for node in [source, sink] {
            if node >= self.n {
                return Err(GraphError::NodeOutOfRange(node, self.n));
            }
        }
        if source == sink {
            return Err(GraphError::SourceIsSink);
        }
        Ok(())
    }

    /// Edmonds-Karp maximum flow from `source` to `sink`.
    pub fn max_flow_edmonds_karp(&self, source: usize, sink: usize) -> Result<u64, GraphError> {
        Ok(self.saturate(source, sink)?.1)
    }

    /// Dinic's maximum flow from `source` to `sink`.
    pub fn max_flow_dinic(&self, source: usize, sink: usize) -> Result<u64, GraphError> {
        self.check_endpoints(source, sink)?;
        let mut residual = self.cap.clone();
        let mut flow = 0;

        while let Some(level) = level_graph(&residual, &self.adj, source, sink) {
            let mut next = vec![0usize; self.n];
            loop {
                let pushed = blocking_flow(
                    &mut residual,
                    &self.adj,
                    &level,
                    &mut next,
                    source,
                    sink,
                    u64::MAX,
                );
                if pushed == 0 {
                    break;
                }
                flow += pushed;
                debug!(pushed, total = flow, "blocking flow phase pushed");
            }
        }

        Ok(flow)
    }

    /// Residual capacities after running max flow; used by the min-cut kata.
    pub(crate) fn residual_after_max_flow(
        &self,
        source: usize,
        sink: usize,
    ) -> Result<Vec<Vec<u64>>, GraphError> {
        Ok(self.saturate(source, sink)?.0)
    }

    /// Shortest-augmenting-path saturation; the shared core of Edmonds-Karp
    /// and the min-cut residual.
    fn saturate(&self, source: usize, sink: usize) -> Result<(Vec<Vec<u64>>, u64), GraphError> {
        self.check_endpoints(source, sink)?;
        let mut residual = self.cap.clone();
        let mut flow = 0;

        while let Some(parent) = bfs_augmenting_path(&residual, &self.adj, source, sink) {
            // Bottleneck along the path sink -> source.
            let mut bottleneck = u64::MAX;
            let mut v = sink;
            while v != source {
                let u = parent[v];
                bottleneck = bottleneck.min(residual[u][v]);
                v = u;
            }

            let mut v = sink;
            while v != source {
                let u = parent[v];
                residual[u][v] -= bottleneck;
                residual[v][u] += bottleneck;
                v = u;
            }

            flow += bottleneck;
            debug!(bottleneck, total = flow, "augmenting path applied");
        }

        Ok((residual, flow))
    }

    pub(crate) fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }
}

fn bfs_augmenting_path(
    residual: &[Vec<u64>],
    adj: &[Vec<usize>],
    source: usize,
    sink: usize,
) -> Option<Vec<usize>> {
    let n = residual.len();
    let mut parent = vec![usize::MAX; n];
    parent[source] = source;
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        for &v in &adj[u] {
            if parent[v] == usize::MAX && residual[u][v] > 0 {
                parent[v] = u;
                if v == sink {
                    return Some(parent);
                }
                queue.push_back(v);
            }
        }
    }
    None
}

fn level_graph(
    residual: &[Vec<u64>],
    adj: &[Vec<usize>],
    source: usize,
    sink: usize,
) -> Option<Vec<u32>> {
    let n = residual.len();
    let mut level = vec![u32::MAX; n];
    level[source] = 0;
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        for &v in &adj[u] {
            if level[v] == u32::MAX && residual[u][v] > 0 {
                level[v] = level[u] + 1;
                queue.push_back(v);
            }
        }
    }

    (level[sink] != u32::MAX).then_some(level)
}

fn blocking_flow(
    residual: &mut [Vec<u64>],
    adj: &[Vec<usize>],
    level: &[u32],
    next: &mut [usize],
    u: usize,
    sink: usize,
    limit: u64,
) -> u64 {
    if u == sink {
        return limit;
    }
    while next[u] < adj[u].len() {
        let v = adj[u][next[u]];
        if residual[u][v] > 0 && level[v] == level[u] + 1 {
            let pushed = blocking_flow(
                residual,
                adj,
                level,
                next,
                v,
                sink,
                limit.min(residual[u][v]),
            );
            if pushed > 0 {
                residual[u][v] -= pushed;
                residual[v][u] += pushed;
                return pushed;
            }
        }
        next[u] += 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Classic CLRS example network, max flow 23.
    fn clrs_network() -> FlowNetwork {
        let mut net = FlowNetwork::new(6);
        for &(u, v, c) in &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ] {
            net.add_edge(u, v, c).unwrap();
        }
        net
    }

    #[test]
    fn clrs_flow_is_23() {
        let net = clrs_network();
        assert_eq!(net.max_flow_edmonds_karp(0, 5), Ok(23));
        assert_eq!(net.max_flow_dinic(0, 5), Ok(23));
    }

    #[test]
    fn no_path_means_zero_flow() {
        let mut net = FlowNetwork::new(4);
        net.add_edge(0, 1, 5).unwrap();
        net.add_edge(2, 3, 5).unwrap();
        assert_eq!(net.max_flow_edmonds_karp(0, 3), Ok(0));
        assert_eq!(net.max_flow_dinic(0, 3), Ok(0));
    }

    #[test]
    fn parallel_edges_accumulate() {
        let mut net = FlowNetwork::new(2);
        net.add_edge(0, 1, 3).unwrap();
        net.add_edge(0, 1, 4).unwrap();
        assert_eq!(net.max_flow_edmonds_karp(0, 1), Ok(7));
    }

    #[test]
    fn endpoint_validation() {
        let net = FlowNetwork::new(3);
        assert_eq!(net.max_flow_dinic(1, 1), Err(GraphError::SourceIsSink));
        assert_eq!(
            net.max_flow_edmonds_karp(0, 9),
            Err(GraphError::NodeOutOfRange(9, 3))
        );
        let mut net = FlowNetwork::new(2);
        assert_eq!(
            net.add_edge(0, 5, 1),
            Err(GraphError::NodeOutOfRange(5, 2))
        );
    }

    #[test]
    fn zero_capacity_edge_carries_nothing() {
        let mut net = FlowNetwork::new(2);
        net.add_edge(0, 1, 0).unwrap();
        assert_eq!(net.max_flow_edmonds_karp(0, 1), Ok(0));
    }
}
