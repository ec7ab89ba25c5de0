//! Maximum subarray sums (Kadane's algorithm).

/// Largest sum over all non-empty subarrays. `None` for empty input.
pub fn max_subarray_sum(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut best = first;
    let mut current = first;
    for &x in rest {
        current = x.max(current + x);
        best = best.max(current);
    }
    Some(best)
}

/// Maximum Subarray Sum With One Deletion (LeetCode 1186): largest sum of
/// a non-empty subarray from which at most one element may be removed.
pub fn max_subarray_sum_one_deletion(nums: &[i64]) -> Option<i64> {
    if nums.is_empty() {
        return None;
    }
    let mut keep = nums[0]; // best subarray ending here, nothing deleted
    let mut dropped = i64::MIN; // best subarray ending here, one element deleted
    let mut best = nums[0];

    for &x in &nums[1..] {
        // Delete x itself, or extend a run that already dropped one.
        dropped = keep.max(dropped.saturating_add(x));
        keep = x.max(keep + x);
        best = best.max(keep).max(dropped);
    }
    Some(best)
}
