//! Majority element via Boyer-Moore voting.

/// Element occurring more than n/2 times, if any. The voting pass finds the
/// only possible candidate; a second pass confirms it, so the function is
/// total even when no majority exists.
pub fn majority_element(nums: &[i64]) -> Option<i64> {
    let mut candidate = None;
    let mut count = 0usize;
    for &x in nums {
        match candidate {
            Some(c) if c == x => count += 1,
            _ if count == 0 => {
                candidate = Some(x);
                count = 1;
            }
            _ => count -= 1,
        }
    }

    let candidate = candidate?;
    let occurrences = nums.iter().filter(|&&x| x == candidate).count();
    (occurrences * 2 > nums.len()).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[3, 2, 3], Some(3))]
    #[test_case(&[2, 2, 1, 1, 1, 2, 2], Some(2))]
    #[test_case(&[1, 2, 3], None; "no majority")]
    #[test_case(&[], None; "empty")]
    #[test_case(&[7], Some(7); "singleton")]
    fn voting(nums: &[i64], expected: Option<i64>) {
        assert_eq!(majority_element(nums), expected);
    }
}
