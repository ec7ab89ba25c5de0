//! Gray Code (LeetCode 89): the n-bit reflected sequence i ^ (i >> 1).
//! Consecutive codes differ in exactly one bit, cyclically. Widths that
//! would overflow the `u32` code space (or the shift itself) yield `None`.

pub fn gray_code(bits: u32) -> Option<Vec<u32>> {
    if bits >= 32 {
        return None;
    }
    Some((0..1u32 << bits).map(|i| i ^ (i >> 1)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_bit_sequence() {
        assert_eq!(gray_code(2), Some(vec![0, 1, 3, 2]));
    }

    #[test]
    fn zero_bits() {
        assert_eq!(gray_code(0), Some(vec![0]));
    }

    #[test]
    fn full_width_is_rejected() {
        assert_eq!(gray_code(32), None);
        assert_eq!(gray_code(u32::MAX), None);
    }

    #[test]
    fn neighbors_differ_in_one_bit() {
        let codes = gray_code(4).unwrap();
        assert_eq!(codes.len(), 16);
        for pair in codes.windows(2) {
            assert_eq!((pair[0] ^ pair[1]).count_ones(), 1);
        }
        // Cyclic: last wraps to first.
        assert_eq!((codes[15] ^ codes[0]).count_ones(), 1);
    }
}
