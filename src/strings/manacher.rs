//! Longest Palindromic Substring via Manacher's algorithm.
//!
//! The text is interleaved with sentinel positions so even and odd
//! palindromes share one radius array; each center extends inside the
//! rightmost known palindrome for free before probing further. ASCII text
//! runs over the raw bytes; anything else runs over chars so the returned
//! slice always lands on character boundaries.

pub fn longest_palindrome(s: &str) -> &str {
    if s.len() < 2 {
        return s;
    }

    if s.is_ascii() {
        let (start, len) = palindromic_span(s.as_bytes());
        return &s[start..start + len];
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return s;
    }
    let (start, len) = palindromic_span(&chars);
    let byte_start = s.char_indices().nth(start).map_or(0, |(i, _)| i);
    let byte_end = s
        .char_indices()
        .nth(start + len)
        .map_or(s.len(), |(i, _)| i);
    &s[byte_start..byte_end]
}

/// Longest palindromic run as (start, length) in element units. Index i of
/// the virtual padded sequence is a sentinel when even, `items[i / 2]`
/// when odd; a radius there equals the palindrome length in `items`.
fn palindromic_span<T: Eq>(items: &[T]) -> (usize, usize) {
    let n = items.len() * 2 + 1;
    let at = |i: usize| (i % 2 == 1).then(|| &items[i / 2]);

    let mut radius = vec![0usize; n];
    let (mut center, mut right) = (0, 0);
    let (mut best_len, mut best_center) = (0, 0);

    for i in 0..n {
        if i < right {
            radius[i] = radius[2 * center - i].min(right - i);
        }
        while i > radius[i]
            && i + radius[i] + 1 < n
            && at(i - radius[i] - 1) == at(i + radius[i] + 1)
        {
            radius[i] += 1;
        }
        if i + radius[i] > right {
            center = i;
            right = i + radius[i];
        }
        if radius[i] > best_len {
            best_len = radius[i];
            best_center = i;
        }
    }

    ((best_center - best_len) / 2, best_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("babad", "bab"; "odd palindrome")]
    #[test_case("cbbd", "bb"; "even palindrome")]
    #[test_case("a", "a")]
    #[test_case("", "")]
    #[test_case("ac", "a"; "no repeat keeps first char")]
    #[test_case("forgeeksskeegfor", "geeksskeeg")]
    #[test_case("aaaa", "aaaa"; "whole string")]
    fn cases(input: &str, expected: &str) {
        assert_eq!(longest_palindrome(input), expected);
    }

    #[test_case("é", "é"; "single two byte char")]
    #[test_case("éé", "éé"; "even multi byte palindrome")]
    #[test_case("abéba", "abéba"; "multi byte center")]
    #[test_case("xxéëéyy", "éëé"; "multi byte beats ascii pair")]
    #[test_case("über", "ü"; "no multi byte repeat")]
    fn non_ascii_cases(input: &str, expected: &str) {
        assert_eq!(longest_palindrome(input), expected);
    }
}
