//! Quickselect and the median built on top of it.

use std::cmp::Ordering;

/// Median of a sequence: the middle value, or both middle values for an even length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Median<T> {
    Single(T),
    Pair(T, T),
}

/// Returns the `k`-th smallest element of `v` (0 based), reordering `v` in the process.
///
/// Average *O*(*n*), worst case *O*(*n*^2). Returns `None` if `k >= v.len()`.
pub fn quick_select<T: Ord + Clone>(v: &mut [T], k: usize) -> Option<T> {
    if k >= v.len() {
        return None;
    }

    let mut v = v;
    let mut k = k;
    loop {
        let pivot = v[v.len() / 2].clone();
        let (lt_end, gt_start) = partition_three_way(v, &pivot);

        if k < lt_end {
            let rest = v;
            v = &mut rest[..lt_end];
        } else if k < gt_start {
            return Some(pivot);
        } else {
            let rest = v;
            v = &mut rest[gt_start..];
            k -= gt_start;
        }
    }
}

/// Dutch national flag partition, returns `(lt_end, gt_start)` such that `v[..lt_end] < pivot`,
/// `v[lt_end..gt_start] == pivot` and `v[gt_start..] > pivot`.
fn partition_three_way<T: Ord>(v: &mut [T], pivot: &T) -> (usize, usize) {
    let mut lt_end = 0;
    let mut i = 0;
    let mut gt_start = v.len();

    while i < gt_start {
        match v[i].cmp(pivot) {
            Ordering::Less => {
                v.swap(lt_end, i);
                lt_end += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt_start -= 1;
                v.swap(i, gt_start);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt_end, gt_start)
}

/// Median of `v` without modifying it. `None` for an empty slice.
pub fn median<T: Ord + Clone>(v: &[T]) -> Option<Median<T>> {
    let mut scratch = v.to_vec();
    let len = scratch.len();

    if len == 0 {
        None
    } else if len % 2 == 0 {
        let low = quick_select(&mut scratch, len / 2 - 1)?;
        let high = quick_select(&mut scratch, len / 2)?;
        Some(Median::Pair(low, high))
    } else {
        quick_select(&mut scratch, len / 2).map(Median::Single)
    }
}
