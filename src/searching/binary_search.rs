pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = (l + r) / 2;
        if &arr[m] == target {
            return Some(m);
        }
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    None
}

/// Find First and Last Position of Element in Sorted Array (LeetCode 34).
pub fn equal_range<T: Ord>(arr: &[T], target: &T) -> Option<(usize, usize)> {
    let first = lower_bound(arr, target);
    if first == arr.len() || &arr[first] != target {
        return None;
    }
    let last = upper_bound(arr, target) - 1;
    Some((first, last))
}

fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = (l + r) / 2;
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}

fn upper_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = (l + r) / 2;
        if &arr[m] <= target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}
