//! Decode Ways (LeetCode 91): count decodings of a digit string where
//! "1".."26" map to letters. Rolling pair of counts; leading zeros kill a
//! branch.

pub fn decode_ways(digits: &str) -> u64 {
    let bytes = digits.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    let mut prev = 1u64; // ways for prefix ending two back
    let mut current = if bytes[0] == b'0' { 0 } else { 1 };

    for i in 1..bytes.len() {
        let mut next = 0;
        if bytes[i] != b'0' {
            next += current;
        }
        let pair = (bytes[i - 1] - b'0') * 10 + (bytes[i] - b'0');
        if (10..=26).contains(&pair) {
            next += prev;
        }
        prev = current;
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("12", 2)]
    #[test_case("226", 3)]
    #[test_case("06", 0)]
    #[test_case("0", 0)]
    #[test_case("10", 1)]
    #[test_case("100", 0)]
    #[test_case("27", 1)]
    #[test_case("11106", 2)]
    #[test_case("", 0)]
    #[test_case("1a2", 0; "non digit rejected")]
    fn cases(digits: &str, expected: u64) {
        assert_eq!(decode_ways(digits), expected);
    }
}
