//! # algo-katas
//!
//! Interview algorithm katas organized by category.
//!
//! ## Modules
//!
//! - `arrays` – Subarray and in-place array katas (Kadane, Boyer-Moore voting, matrix rotation)
//! - `two_pointers` – Two-pointer array/string katas (in-place merge, k-sum)
//! - `sliding_window` – Variable-window substring katas
//! - `intervals` – Interval sweep and greedy katas (merge, arrows, meeting rooms)
//! - `searching` – Binary search and binary-search-on-answer katas
//! - `dynamic_programming` – Tabulated DP katas (LIS, knapsack, stock trading)
//! - `strings` – Pattern matching and parsing (KMP, Rabin–Karp, Manacher, atoi)
//! - `numerical` – Bit/number sequences (Gray code)
//! - `graph` – Union-find, MST, max-flow/min-cut, shortest paths, orderings
//! - `trees` – Binary tree katas (build from traversals, zigzag order, balanced BST)
//! - `backtracking` – Exhaustive search katas (combination sum, N-queens, permutations)
//! - `grid` – 2-D board katas (surrounded regions, maximal rectangle)
//! - `concurrency` – Pedagogical threading demos (dining philosophers, bounded buffer)
//! - `catalog` – Static table of every kata with its computation kind
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algo_katas::arrays::kadane::max_subarray_sum;
//!
//! assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
//! ```
//!
//! ---
//!
//! Each kata is a self-contained function over in-memory data; there is no
//! shared state between modules.

pub mod arrays;
pub mod backtracking;
pub mod catalog;
pub mod concurrency;
pub mod dynamic_programming;
pub mod graph;
pub mod grid;
pub mod intervals;
pub mod numerical;
pub mod searching;
pub mod sliding_window;
pub mod strings;
pub mod trees;
pub mod two_pointers;
