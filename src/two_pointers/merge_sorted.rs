//! Merge Sorted Array (LeetCode 88).
//!
//! `nums1` holds `m` sorted values followed by `nums2.len()` slots of
//! scratch space; merge `nums2` in from the back so nothing is clobbered.

pub fn merge_sorted(nums1: &mut [i64], m: usize, nums2: &[i64]) {
    debug_assert_eq!(nums1.len(), m + nums2.len());
    let mut write = nums1.len();
    let mut i = m;
    let mut j = nums2.len();

    while j > 0 {
        write -= 1;
        if i > 0 && nums1[i - 1] > nums2[j - 1] {
            nums1[write] = nums1[i - 1];
            i -= 1;
        } else {
            nums1[write] = nums2[j - 1];
            j -= 1;
        }
    }
}
