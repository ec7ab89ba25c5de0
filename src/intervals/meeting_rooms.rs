//! Meeting Rooms II (LeetCode 253): minimum rooms so no two meetings share
//! one. Sweep sorted starts against a min-heap of occupied-room end times.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub fn min_meeting_rooms(meetings: &[(i64, i64)]) -> usize {
    let mut sorted = meetings.to_vec();
    sorted.sort_unstable();

    let mut ends: BinaryHeap<Reverse<i64>> = BinaryHeap::new();
    let mut rooms = 0;

    for (start, end) in sorted {
        while matches!(ends.peek(), Some(&Reverse(e)) if e <= start) {
            ends.pop();
        }
        ends.push(Reverse(end));
        rooms = rooms.max(ends.len());
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[(0, 30), (5, 10), (15, 20)], 2)]
    #[test_case(&[(7, 10), (2, 4)], 1)]
    #[test_case(&[(1, 5), (5, 9)], 1; "back to back shares a room")]
    #[test_case(&[(1, 10), (2, 10), (3, 10)], 3)]
    #[test_case(&[], 0)]
    fn cases(meetings: &[(i64, i64)], expected: usize) {
        assert_eq!(min_meeting_rooms(meetings), expected);
    }
}
