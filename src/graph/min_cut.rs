//! Minimum s-t cut via max-flow/min-cut duality.
//!
//! After saturating the network, the nodes still reachable from the source
//! in the residual graph form the source side of the cut; every original
//! edge leaving that set is saturated and belongs to the cut.

use std::collections::VecDeque;

use super::max_flow::FlowNetwork;
use super::GraphError;

#[derive(Debug, PartialEq, Eq)]
pub struct MinCut {
    /// Total capacity crossing the cut; equals the maximum flow value.
    pub capacity: u64,
    /// Original edges (u, v) with u on the source side and v on the sink side.
    pub edges: Vec<(usize, usize)>,
}

pub fn min_cut(net: &FlowNetwork, source: usize, sink: usize) -> Result<MinCut, GraphError> {
    let residual = net.residual_after_max_flow(source, sink)?;

    let mut reachable = vec![false; net.len()];
    reachable[source] = true;
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        for &v in net.neighbors(u) {
            if !reachable[v] && residual[u][v] > 0 {
                reachable[v] = true;
                queue.push_back(v);
            }
        }
    }

    let mut capacity = 0;
    let mut edges = Vec::new();
    for u in 0..net.len() {
        if !reachable[u] {
            continue;
        }
        for &v in net.neighbors(u) {
            if !reachable[v] && net.capacity(u, v) > 0 {
                capacity += net.capacity(u, v);
                edges.push((u, v));
            }
        }
    }
    edges.sort_unstable();

    Ok(MinCut { capacity, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_matches_flow_on_diamond() {
        let mut net = FlowNetwork::new(4);
        net.add_edge(0, 1, 3).unwrap();
        net.add_edge(0, 2, 2).unwrap();
        net.add_edge(1, 3, 2).unwrap();
        net.add_edge(2, 3, 3).unwrap();

        let flow = net.max_flow_edmonds_karp(0, 3).unwrap();
        let cut = min_cut(&net, 0, 3).unwrap();
        assert_eq!(flow, 4);
        assert_eq!(cut.capacity, flow);
        assert_eq!(cut.edges, vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn single_bottleneck_edge() {
        let mut net = FlowNetwork::new(3);
        net.add_edge(0, 1, 100).unwrap();
        net.add_edge(1, 2, 1).unwrap();

        let cut = min_cut(&net, 0, 2).unwrap();
        assert_eq!(cut.capacity, 1);
        assert_eq!(cut.edges, vec![(1, 2)]);
    }

    #[test]
    fn disconnected_cut_is_empty() {
        let mut net = FlowNetwork::new(4);
        net.add_edge(0, 1, 7).unwrap();
        net.add_edge(2, 3, 7).unwrap();

        let cut = min_cut(&net, 0, 3).unwrap();
        assert_eq!(cut.capacity, 0);
        assert!(cut.edges.is_empty());
    }
}
