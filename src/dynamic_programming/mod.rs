pub mod coin_change;
pub mod decode_ways;
pub mod grid_paths;
pub mod knapsack;
pub mod lis;
pub mod stock_trading;
