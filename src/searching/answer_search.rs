//! Binary search on the answer space.

/// Koko Eating Bananas (LeetCode 875): minimum integer eating speed that
/// finishes every pile within `hours`. `None` when even the maximum speed
/// cannot (fewer hours than piles); no piles need no speed, `Some(0)`.
pub fn min_eating_speed(piles: &[u64], hours: u64) -> Option<u64> {
    if piles.is_empty() || (hours as usize) < piles.len() {
        return piles.is_empty().then_some(0);
    }
    let (mut lo, mut hi) = (1, *piles.iter().max().unwrap_or(&1));
    while lo < hi {
        let speed = lo + (hi - lo) / 2;
        let needed: u64 = piles.iter().map(|&p| p.div_ceil(speed)).sum();
        if needed <= hours {
            hi = speed;
        } else {
            lo = speed + 1;
        }
    }
    Some(lo)
}

/// Capacity To Ship Packages Within D Days (LeetCode 1011): minimum ship
/// capacity loading packages in order within `days`.
pub fn min_ship_capacity(weights: &[u64], days: u64) -> Option<u64> {
    if weights.is_empty() || days == 0 {
        return None;
    }
    let (mut lo, mut hi) = (
        *weights.iter().max().unwrap_or(&0),
        weights.iter().sum::<u64>(),
    );
    while lo < hi {
        let capacity = lo + (hi - lo) / 2;
        if days_needed(weights, capacity) <= days {
            hi = capacity;
        } else {
            lo = capacity + 1;
        }
    }
    Some(lo)
}

fn days_needed(weights: &[u64], capacity: u64) -> u64 {
    let mut days = 1;
    let mut load = 0;
    for &w in weights {
        if load + w > capacity {
            days += 1;
            load = 0;
        }
        load += w;
    }
    days
}
