use std::cmp::Ordering;

use crate::sorts::Stability;
use crate::trace::{Step, Trace};

sort_frontend!();

/// Quicksort over the whole slice, see [`sort_range_by_traced`].
pub fn sort_by_traced<T, F, R>(v: &mut [T], stability: Stability, compare: F, trace: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    if v.len() < 2 {
        return;
    }

    let high = v.len() - 1;
    sort_range_by_traced(v, 0, high, stability, compare, trace);
}

/// Quicksort of the inclusive range `v[low..=high]`, the rest of `v` is left untouched.
///
/// A range with `low >= high` is already sorted. Otherwise `high` must be in bounds.
///
/// # Panics
///
/// Panics if `low < high` and `high >= v.len()`.
pub fn sort_range_by_traced<T, F, R>(
    v: &mut [T],
    low: usize,
    high: usize,
    stability: Stability,
    mut compare: F,
    trace: &mut R,
) where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    if low >= high {
        return;
    }

    assert!(
        high < v.len(),
        "quicksort range {low}..={high} out of bounds for slice of length {}",
        v.len()
    );

    quicksort(v, low, high, stability, &mut compare, trace);
}

fn quicksort<T, F, R>(
    v: &mut [T],
    mut low: usize,
    mut high: usize,
    stability: Stability,
    compare: &mut F,
    trace: &mut R,
) where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    // Recurse into the shorter side and loop on the longer one, so the stack depth stays
    // logarithmic even when every partition is maximally lopsided.
    while low < high {
        let pivot = partition(v, low, high, stability, compare, trace);

        if pivot - low < high - pivot {
            if pivot > low {
                quicksort(v, low, pivot - 1, stability, compare, trace);
            }
            low = pivot + 1;
        } else {
            quicksort(v, pivot + 1, high, stability, compare, trace);
            if pivot == low {
                break;
            }
            high = pivot - 1;
        }
    }
}

/// Partitions `v[low..=high]` around a pivot and returns the pivot's final index.
///
/// Afterwards everything in `v[low..pivot]` is not greater than the pivot and everything in
/// `v[pivot + 1..=high]` is not less.
///
/// - `Stable` takes `v[high]` as pivot and sends every element `<=` pivot to the left side. Both
///   sides keep their input order, and since the pivot was the last of its equals it stays behind
///   them.
/// - `Unstable` takes `v[low]` as pivot and does a Lomuto pass that admits elements strictly `<`
///   pivot, then swaps the pivot into place.
///
/// # Panics
///
/// Panics if `low > high` or `high >= v.len()`.
pub fn partition<T, F, R>(
    v: &mut [T],
    low: usize,
    high: usize,
    stability: Stability,
    compare: &mut F,
    trace: &mut R,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    assert!(
        low <= high && high < v.len(),
        "partition range {low}..={high} invalid for slice of length {}",
        v.len()
    );

    let pivot = match stability {
        Stability::Stable => low + stable_partition(&mut v[low..=high], compare),
        Stability::Unstable => lomuto_partition(v, low, high, compare, trace),
    };

    trace.step(Step::Partition { pivot }, v);
    pivot
}

fn lomuto_partition<T, F, R>(
    v: &mut [T],
    low: usize,
    high: usize,
    compare: &mut F,
    trace: &mut R,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    // v[low] is the pivot and stays put until the final swap, `lt_end` is the last index of the
    // strictly-less region.
    let mut lt_end = low;

    for i in low + 1..=high {
        if compare(&v[i], &v[low]) == Ordering::Less {
            lt_end += 1;
            if lt_end != i {
                v.swap(lt_end, i);
                trace.step(Step::Swap(lt_end, i), v);
            }
        }
    }

    if lt_end != low {
        v.swap(low, lt_end);
        trace.step(Step::Swap(low, lt_end), v);
    }

    lt_end
}

/// Stable partition of `v` around its last element, returns the pivot position within `v`.
///
/// All comparisons happen before anything moves, so a panicking `compare` leaves `v` untouched.
fn stable_partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot_pos = v.len() - 1;
    let (rest, pivot) = v.split_at(pivot_pos);
    let pivot = &pivot[0];

    // order[dst] == src
    let mut order = Vec::with_capacity(v.len());
    let mut greater = Vec::new();
    for (i, elem) in rest.iter().enumerate() {
        if compare(elem, pivot) == Ordering::Greater {
            greater.push(i);
        } else {
            order.push(i);
        }
    }

    let pivot_dst = order.len();
    order.push(pivot_pos);
    order.extend(greater);

    apply_permutation(v, order);

    pivot_dst
}

/// Rearranges `v` so that the element previously at `order[i]` ends up at `i`, using swaps only.
fn apply_permutation<T>(v: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        let mut current = start;
        loop {
            let next = order[current];
            // Mark as placed, revisiting a placed start then ends immediately.
            order[current] = current;
            if next == start {
                break;
            }
            v.swap(current, next);
            current = next;
        }
    }
}
