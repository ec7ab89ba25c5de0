//! 4Sum (LeetCode 18): all unique quadruplets summing to `target`.
//! Sort, fix two indices, close the rest with two pointers. Sums
//! accumulate in i128 so extreme i64 inputs cannot overflow.

pub fn four_sum(nums: &[i64], target: i64) -> Vec<[i64; 4]> {
    let mut nums = nums.to_vec();
    nums.sort_unstable();
    let n = nums.len();
    let target = target as i128;
    let mut result = Vec::new();

    for i in 0..n.saturating_sub(3) {
        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }
        for j in (i + 1)..(n - 2) {
            if j > i + 1 && nums[j] == nums[j - 1] {
                continue;
            }
            let (mut l, mut r) = (j + 1, n - 1);
            while l < r {
                let sum =
                    nums[i] as i128 + nums[j] as i128 + nums[l] as i128 + nums[r] as i128;
                match sum.cmp(&target) {
                    std::cmp::Ordering::Less => l += 1,
                    std::cmp::Ordering::Greater => r -= 1,
                    std::cmp::Ordering::Equal => {
                        result.push([nums[i], nums[j], nums[l], nums[r]]);
                        l += 1;
                        r -= 1;
                        while l < r && nums[l] == nums[l - 1] {
                            l += 1;
                        }
                        while l < r && nums[r] == nums[r + 1] {
                            r -= 1;
                        }
                    }
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leetcode_sample() {
        let quads = four_sum(&[1, 0, -1, 0, -2, 2], 0);
        assert_eq!(
            quads,
            vec![[-2, -1, 1, 2], [-2, 0, 0, 2], [-1, 0, 0, 1]]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let quads = four_sum(&[2, 2, 2, 2, 2], 8);
        assert_eq!(quads, vec![[2, 2, 2, 2]]);
    }

    #[test]
    fn too_short_input() {
        assert!(four_sum(&[1, 2, 3], 6).is_empty());
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let quads = four_sum(&[i64::MAX, i64::MAX, i64::MAX, i64::MAX], -4);
        assert!(quads.is_empty());
    }
}
