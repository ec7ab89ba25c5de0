//! Rotate Image (LeetCode 48): rotate an n x n matrix 90° clockwise in
//! place. Transpose, then reverse each row.

pub fn rotate_image<T>(matrix: &mut [Vec<T>]) {
    let n = matrix.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (top, bottom) = matrix.split_at_mut(j);
            std::mem::swap(&mut top[i][j], &mut bottom[0][i]);
        }
    }
    for row in matrix.iter_mut() {
        row.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three() {
        let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        rotate_image(&mut m);
        assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn four_rotations_round_trip() {
        let original = vec![vec![5, 1, 9, 11], vec![2, 4, 8, 10], vec![13, 3, 6, 7], vec![15, 14, 12, 16]];
        let mut m = original.clone();
        for _ in 0..4 {
            rotate_image(&mut m);
        }
        assert_eq!(m, original);
    }

    #[test]
    fn degenerate_sizes() {
        let mut empty: Vec<Vec<i32>> = vec![];
        rotate_image(&mut empty);
        let mut single = vec![vec![42]];
        rotate_image(&mut single);
        assert_eq!(single, vec![vec![42]]);
    }
}
