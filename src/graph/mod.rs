pub mod bipartite;
pub mod bridges;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod invariant;
pub mod max_flow;
pub mod min_cut;
pub mod mst;
pub mod topological_sort;
pub mod union_find;

use thiserror::Error;

/// Errors raised while building or running flow-network katas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} out of range for network of {1} nodes")]
    NodeOutOfRange(usize, usize),
    #[error("source and sink must differ")]
    SourceIsSink,
}
