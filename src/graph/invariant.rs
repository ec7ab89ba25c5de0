/// Invariant trait for checks applied to graph algorithm outputs.
pub trait Invariant<T> {
    fn check(&self, value: &T) -> bool;
}

/// Non-negative invariant for integers
pub struct NonNegative;

impl Invariant<i64> for NonNegative {
    fn check(&self, value: &i64) -> bool {
        *value >= 0
    }
}

/// Checks that an order visits every node once and respects every edge.
pub struct ValidTopologicalOrder<'a> {
    pub adj: &'a [Vec<usize>],
}

impl Invariant<Vec<usize>> for ValidTopologicalOrder<'_> {
    fn check(&self, order: &Vec<usize>) -> bool {
        if order.len() != self.adj.len() {
            return false;
        }
        let mut position = vec![usize::MAX; self.adj.len()];
        for (i, &node) in order.iter().enumerate() {
            if node >= self.adj.len() || position[node] != usize::MAX {
                return false;
            }
            position[node] = i;
        }
        self.adj.iter().enumerate().all(|(u, edges)| {
            edges.iter().all(|&v| position[u] < position[v])
        })
    }
}
