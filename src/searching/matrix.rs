//! Search a 2D Matrix II (LeetCode 240): rows and columns each sorted
//! ascending. Staircase walk from the top-right corner, O(m + n).

pub fn search_matrix(matrix: &[Vec<i64>], target: i64) -> bool {
    let mut row = 0;
    let mut col = match matrix.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return false,
    };

    while row < matrix.len() && col > 0 {
        match matrix[row][col - 1].cmp(&target) {
            std::cmp::Ordering::Equal => return true,
            std::cmp::Ordering::Greater => col -= 1,
            std::cmp::Ordering::Less => row += 1,
        }
    }
    false
}
