//! Permutations II (LeetCode 47): all distinct orderings of a multiset.

/// Sorting groups equal values so the search can skip a value when its
/// equal left neighbor is still unused, emitting each distinct permutation
/// exactly once and in lexicographic order.
pub fn unique_permutations(nums: &[i64]) -> Vec<Vec<i64>> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut results = Vec::new();
    let mut current = Vec::with_capacity(sorted.len());
    let mut used = vec![false; sorted.len()];
    extend(&sorted, &mut used, &mut current, &mut results);
    results
}

fn extend(sorted: &[i64], used: &mut [bool], current: &mut Vec<i64>, results: &mut Vec<Vec<i64>>) {
    if current.len() == sorted.len() {
        results.push(current.clone());
        return;
    }
    for i in 0..sorted.len() {
        if used[i] {
            continue;
        }
        if i > 0 && sorted[i] == sorted[i - 1] && !used[i - 1] {
            continue;
        }
        used[i] = true;
        current.push(sorted[i]);
        extend(sorted, used, current, results);
        current.pop();
        used[i] = false;
    }
}
