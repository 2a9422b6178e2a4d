use std::cmp::Ordering;

use crate::sorts::Stability;
use crate::trace::{Step, Trace};

sort_frontend!();

/// Selection sort.
///
/// For every position `i` the minimum of `v[i..]` is selected and moved to `i`.
///
/// - `Stable` scans left to right and keeps the first minimum it finds. All elements between `i`
///   and that minimum are strictly greater, so the minimum is brought forward by rotating
///   `v[i..=min]` right by one, which keeps their relative order.
/// - `Unstable` scans right to left, so the last of several equal minimums is the one picked, and
///   moves it with a single swap. The element displaced from `i` can leap past its equal peers.
pub fn sort_by_traced<T, F, R>(v: &mut [T], stability: Stability, mut compare: F, trace: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Trace<T>,
{
    let len = v.len();

    for i in 0..len {
        let mut min = i;
        let mut select = |j: usize, min: &mut usize| {
            if compare(&v[j], &v[*min]) == Ordering::Less {
                *min = j;
            }
        };

        match stability {
            Stability::Stable => (i + 1..len).for_each(|j| select(j, &mut min)),
            Stability::Unstable => (i + 1..len).rev().for_each(|j| select(j, &mut min)),
        }

        if min == i {
            continue;
        }

        match stability {
            Stability::Stable => {
                v[i..=min].rotate_right(1);
                trace.step(Step::Rotate { start: i, end: min }, v);
            }
            Stability::Unstable => {
                v.swap(i, min);
                trace.step(Step::Swap(i, min), v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::elements;
    use crate::trace::Recorder;
    use crate::Element;

    #[test]
    fn unstable_reverses_equal_keys() {
        let mut v = elements(&[("", 4), ("", 5), ("first", 3), ("second", 3)]);
        sort_elements(&mut v, Stability::Unstable, &mut crate::NoTrace);

        assert_eq!(
            v,
            elements(&[("second", 3), ("first", 3), ("", 4), ("", 5)])
        );
    }

    #[test]
    fn plain_swap_would_break_this() {
        // Swapping `a` out of position 0 would drop it behind `b`.
        let mut v = elements(&[("a", 2), ("b", 2), ("c", 1)]);
        sort_elements(&mut v, Stability::Stable, &mut crate::NoTrace);

        assert_eq!(v, elements(&[("c", 1), ("a", 2), ("b", 2)]));
    }

    #[test]
    fn steps() {
        let mut v = [3, 1, 2];
        let mut rec = Recorder::default();
        sort_by_traced(&mut v, Stability::Stable, i32::cmp, &mut rec);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(
            rec.steps,
            [
                Step::Rotate { start: 0, end: 1 },
                Step::Rotate { start: 1, end: 2 }
            ]
        );

        let mut v = [3, 1, 2];
        let mut rec = Recorder::default();
        sort_by_traced(&mut v, Stability::Unstable, i32::cmp, &mut rec);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(rec.steps, [Step::Swap(0, 1), Step::Swap(1, 2)]);
    }

    #[test]
    fn trace_sees_mutated_slice() {
        let mut v = elements(&[("b", 2), ("a", 1)]);
        let mut snapshots = Vec::new();
        sort_elements(
            &mut v,
            Stability::Stable,
            &mut |_step: Step, s: &[Element<i32>]| snapshots.push(s.to_vec()),
        );

        assert_eq!(snapshots, [elements(&[("a", 1), ("b", 2)])]);
    }
}
