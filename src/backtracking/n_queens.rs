//! N-Queens (LeetCode 51/52): place `n` queens on an `n x n` board so that
//! no two attack each other.

/// Every valid board, one column index per row. Rows are placed top-down;
/// a diagonal is identified by `row + col`, an anti-diagonal by
/// `row + n - 1 - col`, so attack checks are O(1) per square.
pub fn queen_placements(n: usize) -> Vec<Vec<usize>> {
    let mut boards = Vec::new();
    if n == 0 {
        return boards;
    }
    let mut state = Search {
        n,
        cols: vec![false; n],
        diags: vec![false; 2 * n - 1],
        antis: vec![false; 2 * n - 1],
        placed: Vec::with_capacity(n),
    };
    state.place_row(0, &mut boards);
    boards
}

/// Just the count, for sizes where materializing boards is wasteful.
pub fn count_queen_placements(n: usize) -> usize {
    queen_placements(n).len()
}

struct Search {
    n: usize,
    cols: Vec<bool>,
    diags: Vec<bool>,
    antis: Vec<bool>,
    placed: Vec<usize>,
}

impl Search {
    fn place_row(&mut self, row: usize, boards: &mut Vec<Vec<usize>>) {
        if row == self.n {
            boards.push(self.placed.clone());
            return;
        }
        for col in 0..self.n {
            let diag = row + col;
            let anti = row + self.n - 1 - col;
            if self.cols[col] || self.diags[diag] || self.antis[anti] {
                continue;
            }
            self.cols[col] = true;
            self.diags[diag] = true;
            self.antis[anti] = true;
            self.placed.push(col);
            self.place_row(row + 1, boards);
            self.placed.pop();
            self.cols[col] = false;
            self.diags[diag] = false;
            self.antis[anti] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_queens_has_two_boards() {
        assert_eq!(queen_placements(4), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn tiny_boards() {
        assert_eq!(queen_placements(1), vec![vec![0]]);
        assert!(queen_placements(2).is_empty());
        assert!(queen_placements(3).is_empty());
        assert!(queen_placements(0).is_empty());
    }

    #[test]
    fn eight_queens_count() {
        assert_eq!(count_queen_placements(8), 92);
    }

    #[test]
    fn boards_are_mutually_non_attacking() {
        for board in queen_placements(6) {
            for r1 in 0..board.len() {
                for r2 in r1 + 1..board.len() {
                    let (c1, c2) = (board[r1], board[r2]);
                    assert_ne!(c1, c2);
                    assert_ne!(r2 - r1, c1.abs_diff(c2));
                }
            }
        }
    }
}
