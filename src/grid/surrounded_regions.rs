//! Surrounded Regions (LeetCode 130): flip every 'O' region not touching
//! the border. Flood fill from the border marks the survivors; everything
//! else flips.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    X,
    O,
}

pub fn capture_surrounded(board: &mut [Vec<Cell>]) {
    let rows = board.len();
    let cols = board.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return;
    }

    let mut safe = vec![vec![false; cols]; rows];
    let mut stack = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            let border = r == 0 || r == rows - 1 || c == 0 || c == cols - 1;
            if border && board[r][c] == Cell::O {
                stack.push((r, c));
            }
        }
    }

    while let Some((r, c)) = stack.pop() {
        if safe[r][c] || board[r][c] != Cell::O {
            continue;
        }
        safe[r][c] = true;
        if r > 0 {
            stack.push((r - 1, c));
        }
        if r + 1 < rows {
            stack.push((r + 1, c));
        }
        if c > 0 {
            stack.push((r, c - 1));
        }
        if c + 1 < cols {
            stack.push((r, c + 1));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if board[r][c] == Cell::O && !safe[r][c] {
                board[r][c] = Cell::X;
            }
        }
    }
}
