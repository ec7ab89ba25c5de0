//! Merge Intervals (LeetCode 56) and Insert Interval (LeetCode 57).
//! Intervals are inclusive `(start, end)` pairs; touching intervals merge.

pub fn merge_intervals(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Inserts `new` into already-sorted, non-overlapping `intervals`.
pub fn insert_interval(intervals: &[(i64, i64)], new: (i64, i64)) -> Vec<(i64, i64)> {
    let mut result = Vec::with_capacity(intervals.len() + 1);
    let mut new = new;
    let mut placed = false;

    for &(start, end) in intervals {
        if end < new.0 {
            result.push((start, end));
        } else if new.1 < start {
            if !placed {
                result.push(new);
                placed = true;
            }
            result.push((start, end));
        } else {
            new = (new.0.min(start), new.1.max(end));
        }
    }
    if !placed {
        result.push(new);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sample() {
        let merged = merge_intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)]);
        assert_eq!(merged, vec![(1, 6), (8, 10), (15, 18)]);
    }

    #[test]
    fn touching_intervals_merge() {
        assert_eq!(merge_intervals(&[(1, 4), (4, 5)]), vec![(1, 5)]);
    }

    #[test]
    fn unsorted_input() {
        assert_eq!(merge_intervals(&[(8, 9), (1, 2), (2, 3)]), vec![(1, 3), (8, 9)]);
    }

    #[test]
    fn insert_bridges_many() {
        let result = insert_interval(&[(1, 2), (3, 5), (6, 7), (8, 10), (12, 16)], (4, 8));
        assert_eq!(result, vec![(1, 2), (3, 10), (12, 16)]);
    }

    #[test]
    fn insert_into_empty() {
        assert_eq!(insert_interval(&[], (5, 7)), vec![(5, 7)]);
    }

    #[test]
    fn insert_disjoint_front() {
        assert_eq!(insert_interval(&[(4, 6)], (1, 2)), vec![(1, 2), (4, 6)]);
    }
}
