//! Remove Element (LeetCode 27): drop every occurrence of `value` in place
//! and return the new logical length.

pub fn remove_element(nums: &mut [i64], value: i64) -> usize {
    let mut keep = 0;
    for i in 0..nums.len() {
        if nums[i] != value {
            nums.swap(keep, i);
            keep += 1;
        }
    }
    keep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leetcode_sample() {
        let mut nums = vec![0, 1, 2, 2, 3, 0, 4, 2];
        let len = remove_element(&mut nums, 2);
        assert_eq!(len, 5);
        let mut kept = nums[..len].to_vec();
        kept.sort_unstable();
        assert_eq!(kept, vec![0, 0, 1, 3, 4]);
    }

    #[test]
    fn value_absent_keeps_all() {
        let mut nums = vec![1, 2, 3];
        assert_eq!(remove_element(&mut nums, 9), 3);
        assert_eq!(nums, vec![1, 2, 3]);
    }

    #[test]
    fn all_removed() {
        let mut nums = vec![7, 7, 7];
        assert_eq!(remove_element(&mut nums, 7), 0);
    }
}
