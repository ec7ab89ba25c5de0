//! Longest Repeating Character Replacement (LeetCode 424).
//!
//! The window is valid while (window length - count of its most frequent
//! byte) <= k. The window never shrinks below the best length found, so a
//! stale max frequency only makes the check conservative, never wrong.

pub fn longest_repeating_replacement(s: &str, k: usize) -> usize {
    let bytes = s.as_bytes();
    let mut counts = [0usize; 256];
    let mut max_in_window = 0;
    let mut start = 0;

    for (end, &b) in bytes.iter().enumerate() {
        counts[b as usize] += 1;
        max_in_window = max_in_window.max(counts[b as usize]);

        if end - start + 1 > max_in_window + k {
            counts[bytes[start] as usize] -= 1;
            start += 1;
        }
    }
    bytes.len() - start
}
