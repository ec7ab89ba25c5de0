//! Coin Change (LeetCode 322): fewest coins for `amount` with unlimited
//! supply of each denomination. `None` when the amount is unreachable.

pub fn min_coins(coins: &[u64], amount: u64) -> Option<u64> {
    let amount = amount as usize;
    let mut table = vec![u64::MAX; amount + 1];
    table[0] = 0;

    for target in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin == 0 || coin > target {
                continue;
            }
            if table[target - coin] != u64::MAX {
                table[target] = table[target].min(table[target - coin] + 1);
            }
        }
    }

    (table[amount] != u64::MAX).then(|| table[amount])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[1, 2, 5], 11, Some(3))]
    #[test_case(&[2], 3, None)]
    #[test_case(&[1], 0, Some(0))]
    #[test_case(&[186, 419, 83, 408], 6249, Some(20))]
    #[test_case(&[], 5, None; "no coins")]
    #[test_case(&[0, 3], 9, Some(3); "zero denomination ignored")]
    fn cases(coins: &[u64], amount: u64, expected: Option<u64>) {
        assert_eq!(min_coins(coins, amount), expected);
    }
}
