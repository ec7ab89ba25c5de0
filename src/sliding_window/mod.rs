pub mod longest_repeating_replacement;
pub mod longest_unique_substring;
pub mod min_window_substring;
