//! 0/1 knapsack: maximum value within a weight capacity, each item usable
//! once. 1-D table folded right-to-left so an item is never counted twice.

pub fn knapsack_max_value(items: &[(u64, u64)], capacity: u64) -> u64 {
    let cap = capacity as usize;
    let mut best = vec![0u64; cap + 1];

    for &(weight, value) in items {
        let w = weight as usize;
        if w > cap {
            continue;
        }
        for c in (w..=cap).rev() {
            best[c] = best[c].max(best[c - w] + value);
        }
    }
    best[cap]
}
