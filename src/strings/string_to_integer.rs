//! String to Integer / atoi (LeetCode 8): skip leading spaces, optional
//! sign, consume digits, clamp to i32 bounds, ignore the rest.

pub fn string_to_integer(s: &str) -> i32 {
    let mut chars = s.trim_start_matches(' ').bytes().peekable();

    let sign = match chars.peek() {
        Some(b'-') => {
            chars.next();
            -1i64
        }
        Some(b'+') => {
            chars.next();
            1
        }
        _ => 1,
    };

    let mut value = 0i64;
    for b in chars {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + i64::from(b - b'0');
        if sign * value < i64::from(i32::MIN) {
            return i32::MIN;
        }
        if sign * value > i64::from(i32::MAX) {
            return i32::MAX;
        }
    }
    (sign * value) as i32
}
