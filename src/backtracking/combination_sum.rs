//! Combination Sum (LeetCode 39): every multiset of candidates summing to the
//! target, each candidate reusable any number of times.

/// Sorting the candidates lets the search break as soon as one overshoots
/// the remaining target. Duplicates and zeros are dropped up front so the
/// recursion terminates.
pub fn combination_sum(candidates: &[u32], target: u32) -> Vec<Vec<u32>> {
    let mut pool: Vec<u32> = candidates.iter().copied().filter(|&c| c > 0).collect();
    pool.sort_unstable();
    pool.dedup();

    let mut results = Vec::new();
    let mut current = Vec::new();
    descend(&pool, target, &mut current, &mut results);
    results
}

fn descend(pool: &[u32], remaining: u32, current: &mut Vec<u32>, results: &mut Vec<Vec<u32>>) {
    if remaining == 0 {
        results.push(current.clone());
        return;
    }
    for (i, &candidate) in pool.iter().enumerate() {
        if candidate > remaining {
            break;
        }
        current.push(candidate);
        descend(&pool[i..], remaining - candidate, current, results);
        current.pop();
    }
}
