//! Longest Increasing Subsequence (LeetCode 300), O(n log n).
//!
//! `tails[k]` holds the smallest possible tail of an increasing
//! subsequence of length k+1; each element replaces its lower bound.

pub fn longest_increasing_subsequence(nums: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &x in nums {
        match tails.binary_search(&x) {
            Ok(_) => {} // equal tail already present; strict increase only
            Err(pos) if pos == tails.len() => tails.push(x),
            Err(pos) => tails[pos] = x,
        }
    }
    tails.len()
}
