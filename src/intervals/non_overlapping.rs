//! Non-overlapping Intervals (LeetCode 435): minimum removals so the rest
//! do not overlap. Greedy: keep the interval ending earliest.

pub fn min_removals_for_non_overlap(intervals: &[(i64, i64)]) -> usize {
    if intervals.is_empty() {
        return 0;
    }
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|&(_, end)| end);

    let mut kept = 1;
    let mut last_end = sorted[0].1;
    for &(start, end) in &sorted[1..] {
        if start >= last_end {
            kept += 1;
            last_end = end;
        }
    }
    intervals.len() - kept
}
