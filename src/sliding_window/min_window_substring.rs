//! Minimum Window Substring (LeetCode 76): shortest slice of `haystack`
//! containing every byte of `needle` with multiplicity.

pub fn min_window_substring<'a>(haystack: &'a str, needle: &str) -> Option<&'a str> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let hay = haystack.as_bytes();

    let mut required = [0i64; 256];
    for &b in needle.as_bytes() {
        required[b as usize] += 1;
    }
    let mut missing = needle.len() as i64;

    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;

    for (end, &b) in hay.iter().enumerate() {
        if required[b as usize] > 0 {
            missing -= 1;
        }
        required[b as usize] -= 1;

        while missing == 0 {
            let len = end - start + 1;
            if best.map_or(true, |(s, e)| len < e - s) {
                best = Some((start, start + len));
            }
            required[hay[start] as usize] += 1;
            if required[hay[start] as usize] > 0 {
                missing += 1;
            }
            start += 1;
        }
    }

    best.map(|(s, e)| &haystack[s..e])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leetcode_sample() {
        assert_eq!(min_window_substring("ADOBECODEBANC", "ABC"), Some("BANC"));
    }

    #[test]
    fn whole_string_is_the_window() {
        assert_eq!(min_window_substring("a", "a"), Some("a"));
    }

    #[test]
    fn multiplicity_matters() {
        assert_eq!(min_window_substring("a", "aa"), None);
        assert_eq!(min_window_substring("aaflslflsldkalskaaa", "aaa"), Some("aaa"));
    }

    #[test]
    fn no_window() {
        assert_eq!(min_window_substring("xyz", "q"), None);
        assert_eq!(min_window_substring("abc", ""), None);
    }
}
