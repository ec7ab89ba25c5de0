//! Compare Version Numbers (LeetCode 165): dot-separated numeric fields,
//! missing fields read as zero, leading zeros ignored.

use std::cmp::Ordering;

pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.').map(parse_field);
    let mut right = b.split('.').map(parse_field);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let cmp = l.unwrap_or(0).cmp(&r.unwrap_or(0));
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
        }
    }
}

fn parse_field(field: &str) -> u64 {
    field.parse().unwrap_or(0)
}
