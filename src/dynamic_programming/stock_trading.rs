//! Best Time to Buy and Sell Stock IV (LeetCode 188): max profit with at
//! most `k` transactions. When k >= n/2 the limit never binds and the
//! greedy sum of every rise is the answer.

pub fn max_profit_k_transactions(k: usize, prices: &[u64]) -> u64 {
    let n = prices.len();
    if n < 2 || k == 0 {
        return 0;
    }

    if k >= n / 2 {
        return prices
            .windows(2)
            .map(|w| w[1].saturating_sub(w[0]))
            .sum();
    }

    // hold[t]: best balance while holding after at most t buys.
    // free[t]: best balance while flat after at most t sells.
    let mut hold = vec![i64::MIN / 2; k + 1];
    let mut free = vec![0i64; k + 1];

    for &price in prices {
        let price = price as i64;
        for t in 1..=k {
            hold[t] = hold[t].max(free[t - 1] - price);
            free[t] = free[t].max(hold[t] + price);
        }
    }
    free[k].max(0) as u64
}
