/// Mapping of kata modules to category of computation and whether
/// deterministic or stochastic.
pub const ALGORITHM_CATALOG: &[(&str, &str, &str)] = &[
    // Arrays
    ("arrays/kadane.rs", "Subarray optimization", "Deterministic"),
    ("arrays/majority.rs", "Voting", "Deterministic"),
    ("arrays/rotate_image.rs", "In-place transform", "Deterministic"),
    // Two pointers
    ("two_pointers/merge_sorted.rs", "In-place merge", "Deterministic"),
    ("two_pointers/remove_element.rs", "In-place filter", "Deterministic"),
    (
        "two_pointers/reverse_only_letters.rs",
        "In-place transform",
        "Deterministic",
    ),
    ("two_pointers/four_sum.rs", "K-sum enumeration", "Deterministic"),
    // Sliding window
    (
        "sliding_window/longest_unique_substring.rs",
        "Window maximization",
        "Deterministic",
    ),
    (
        "sliding_window/longest_repeating_replacement.rs",
        "Window maximization",
        "Deterministic",
    ),
    (
        "sliding_window/min_window_substring.rs",
        "Window minimization",
        "Deterministic",
    ),
    // Intervals
    ("intervals/merge.rs", "Interval sweep", "Deterministic"),
    ("intervals/non_overlapping.rs", "Greedy selection", "Deterministic"),
    ("intervals/min_arrows.rs", "Greedy point cover", "Deterministic"),
    ("intervals/meeting_rooms.rs", "Sweep with heap", "Deterministic"),
    // Searching
    ("searching/binary_search.rs", "Ordered lookup", "Deterministic"),
    ("searching/rotated.rs", "Ordered lookup", "Deterministic"),
    ("searching/peak.rs", "Ordered lookup", "Deterministic"),
    ("searching/single_element.rs", "Ordered lookup", "Deterministic"),
    (
        "searching/answer_search.rs",
        "Binary search on answer",
        "Deterministic",
    ),
    ("searching/matrix.rs", "Staircase search", "Deterministic"),
    // Dynamic programming
    ("dynamic_programming/lis.rs", "DP computation", "Deterministic"),
    ("dynamic_programming/knapsack.rs", "DP computation", "Deterministic"),
    (
        "dynamic_programming/coin_change.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "dynamic_programming/decode_ways.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "dynamic_programming/stock_trading.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "dynamic_programming/grid_paths.rs",
        "DP computation",
        "Deterministic",
    ),
    // Strings
    ("strings/kmp.rs", "Pattern matching", "Deterministic"),
    ("strings/rabin_karp.rs", "Pattern matching", "Deterministic"),
    ("strings/manacher.rs", "Palindrome search", "Deterministic"),
    ("strings/compare_versions.rs", "Parsing", "Deterministic"),
    ("strings/string_to_integer.rs", "Parsing", "Deterministic"),
    // Numerical
    ("numerical/gray_code.rs", "Sequence generation", "Deterministic"),
    // Graph
    ("graph/union_find.rs", "Disjoint sets", "Deterministic"),
    ("graph/mst.rs", "Minimum spanning tree", "Deterministic"),
    ("graph/max_flow.rs", "Maximum flow", "Deterministic"),
    ("graph/min_cut.rs", "Minimum cut", "Deterministic"),
    ("graph/dijkstra.rs", "Shortest path", "Deterministic"),
    ("graph/floyd_warshall.rs", "All-pairs shortest path", "Deterministic"),
    ("graph/topological_sort.rs", "Topological ordering", "Deterministic"),
    ("graph/bipartite.rs", "Graph coloring", "Deterministic"),
    ("graph/bridges.rs", "Cut edges", "Deterministic"),
    // Trees
    (
        "trees/build_from_traversals.rs",
        "Tree reconstruction",
        "Deterministic",
    ),
    (
        "trees/sorted_array_to_bst.rs",
        "Tree construction",
        "Deterministic",
    ),
    ("trees/zigzag.rs", "Level-order traversal", "Deterministic"),
    // Backtracking
    (
        "backtracking/combination_sum.rs",
        "Exhaustive search",
        "Deterministic",
    ),
    ("backtracking/n_queens.rs", "Exhaustive search", "Deterministic"),
    (
        "backtracking/permutations.rs",
        "Exhaustive search",
        "Deterministic",
    ),
    // Grid
    ("grid/surrounded_regions.rs", "Flood fill", "Deterministic"),
    ("grid/maximal_rectangle.rs", "Histogram stack", "Deterministic"),
    // Concurrency demos: thread interleavings vary, aggregates do not.
    (
        "concurrency/dining_philosophers.rs",
        "Lock ordering demo",
        "Deterministic",
    ),
    (
        "concurrency/bounded_buffer.rs",
        "Producer-consumer demo",
        "Deterministic",
    ),
    (
        "concurrency/print_in_order.rs",
        "Sequencing demo",
        "Deterministic",
    ),
    ("concurrency/worker_pool.rs", "Thread pool demo", "Deterministic"),
];
