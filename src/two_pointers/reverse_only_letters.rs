//! Reverse Only Letters (LeetCode 917): reverse the ASCII letters of a
//! string, leaving every other byte where it stands.

pub fn reverse_only_letters(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    let (mut l, mut r) = (0, bytes.len());

    while l < r {
        if !bytes[l].is_ascii_alphabetic() {
            l += 1;
        } else if !bytes[r - 1].is_ascii_alphabetic() {
            r -= 1;
        } else {
            bytes.swap(l, r - 1);
            l += 1;
            r -= 1;
        }
    }
    // Only ASCII bytes were moved, so the bytes remain valid UTF-8.
    String::from_utf8(bytes).unwrap_or_else(|_| s.to_string())
}
