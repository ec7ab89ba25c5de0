//! Find Peak Element (LeetCode 162): any index strictly greater than its
//! neighbors; adjacent elements differ and the array edges fall off to
//! negative infinity.

pub fn find_peak(nums: &[i64]) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let m = (l + r) / 2;
        if nums[m] < nums[m + 1] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    Some(l)
}
