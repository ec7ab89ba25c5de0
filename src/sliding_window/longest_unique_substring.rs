//! Longest Substring Without Repeating Characters (LeetCode 3).
//! Byte-window with last-seen positions; inputs are treated as byte
//! strings, which matches the ASCII contract of the original kata.

pub fn longest_unique_substring(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut last_seen = [usize::MAX; 256];
    let mut start = 0;
    let mut best = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let prev = last_seen[b as usize];
        if prev != usize::MAX && prev >= start {
            start = prev + 1;
        }
        last_seen[b as usize] = i;
        best = best.max(i - start + 1);
    }
    best
}
