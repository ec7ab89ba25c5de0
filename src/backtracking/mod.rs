pub mod combination_sum;
pub mod n_queens;
pub mod permutations;
