//! Minimum Number of Arrows to Burst Balloons (LeetCode 452).
//! Greedy point cover: sort by end, shoot at each uncovered end. Balloons
//! touching at a single coordinate share an arrow.

pub fn min_arrows(balloons: &[(i64, i64)]) -> usize {
    if balloons.is_empty() {
        return 0;
    }
    let mut sorted = balloons.to_vec();
    sorted.sort_unstable_by_key(|&(_, end)| end);

    let mut arrows = 1;
    let mut arrow_at = sorted[0].1;
    for &(start, end) in &sorted[1..] {
        if start > arrow_at {
            arrows += 1;
            arrow_at = end;
        }
    }
    arrows
}
