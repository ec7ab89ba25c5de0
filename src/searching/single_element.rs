//! Single Element in a Sorted Array (LeetCode 540): every element appears
//! exactly twice except one. Before the lone element pairs start on even
//! indices; after it they start on odd ones.

pub fn single_element(nums: &[i64]) -> Option<i64> {
    if nums.len() % 2 == 0 {
        return None;
    }
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let m = (l + r) / 2;
        let even = m % 2 == 0;
        let paired_right = nums[m] == nums[m + 1];
        if even == paired_right {
            l = if even { m + 2 } else { m + 1 };
        } else {
            r = if even { m } else { m - 1 };
        }
    }
    Some(nums[l])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[1, 1, 2, 3, 3, 4, 4, 8, 8], 2)]
    #[test_case(&[3, 3, 7, 7, 10, 11, 11], 10)]
    #[test_case(&[5], 5)]
    #[test_case(&[1, 1, 9], 9)]
    #[test_case(&[9, 1, 1], 9)]
    fn cases(nums: &[i64], expected: i64) {
        assert_eq!(single_element(nums), Some(expected));
    }

    #[test]
    fn even_length_has_no_answer() {
        assert_eq!(single_element(&[1, 1, 2, 2]), None);
    }
}
