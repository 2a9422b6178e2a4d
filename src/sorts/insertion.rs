use std::cmp::Ordering;

use crate::sorts::Stability;
use crate::trace::{Step, Trace};

sort_frontend!();

/// Insertion sort.
///
/// Each `v[i]` walks left until its predecessor no longer needs to move. `Stable` shifts past
/// predecessors that are strictly greater, `Unstable` also shifts past equal ones, which reverses
/// the relative order of runs of equal elements.
pub fn sort_by_traced<T, F, R>(v: &mut [T], stability: Stability, mut compare: F, trace: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    let must_shift = |ord: Ordering| match stability {
        Stability::Stable => ord == Ordering::Greater,
        Stability::Unstable => ord != Ordering::Less,
    };

    for i in 1..v.len() {
        let mut hole = i;
        while hole > 0 && must_shift(compare(&v[hole - 1], &v[hole])) {
            v.swap(hole - 1, hole);
            trace.step(
                Step::Shift {
                    from: hole - 1,
                    to: hole,
                },
                v,
            );
            hole -= 1;
        }

        if hole != i {
            trace.step(Step::Insert(hole), v);
        }
    }
}
