//! Rotated sorted array katas (LeetCode 153 / 33). Elements are distinct.

/// Find Minimum in Rotated Sorted Array.
pub fn find_min_rotated(nums: &[i64]) -> Option<i64> {
    if nums.is_empty() {
        return None;
    }
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let m = (l + r) / 2;
        if nums[m] > nums[r] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    Some(nums[l])
}

/// Search in Rotated Sorted Array: index of `target`, if present.
pub fn search_rotated(nums: &[i64], target: i64) -> Option<usize> {
    let (mut l, mut r) = (0, nums.len());
    while l < r {
        let m = (l + r) / 2;
        if nums[m] == target {
            return Some(m);
        }
        if nums[l] <= nums[m] {
            // Left half is sorted.
            if nums[l] <= target && target < nums[m] {
                r = m;
            } else {
                l = m + 1;
            }
        } else if nums[m] < target && target <= nums[r - 1] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    None
}
