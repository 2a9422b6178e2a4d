//! Instrumentation hook invoked by the sorts after every elementary mutation.

use std::fmt::Debug;

/// An elementary operation a sort just performed. Indices are absolute positions in the slice
/// passed to the sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Two elements exchanged places.
    Swap(usize, usize),
    /// `v[start..=end]` was rotated right by one, `v[end]` landed at `start`.
    Rotate { start: usize, end: usize },
    /// The element at `from` moved one slot right to `to`, opening a gap for insertion.
    Shift { from: usize, to: usize },
    /// The element being inserted settled at this index.
    Insert(usize),
    /// A partition finished with its pivot at this index.
    Partition { pivot: usize },
}

/// Observer called with the step and the whole slice as it looks right after the step.
pub trait Trace<T> {
    fn step(&mut self, step: Step, v: &[T]);
}

impl<T, F> Trace<T> for F
where
    F: FnMut(Step, &[T]),
{
    #[inline]
    fn step(&mut self, step: Step, v: &[T]) {
        self(step, v)
    }
}

/// Ignores every step.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl<T> Trace<T> for NoTrace {
    #[inline(always)]
    fn step(&mut self, _step: Step, _v: &[T]) {}
}

/// Emits every step as a `tracing` event at trace level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogTrace;

impl<T: Debug> Trace<T> for LogTrace {
    fn step(&mut self, step: Step, v: &[T]) {
        tracing::trace!(?step, "{v:?}");
    }
}

/// Collects steps, handy for asserting on the exact sequence of operations.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub steps: Vec<Step>,
}

impl<T> Trace<T> for Recorder {
    fn step(&mut self, step: Step, _v: &[T]) {
        self.steps.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_subscriber::filter::LevelFilter;

    use crate::sorts::{insertion, quicksort};
    use crate::Stability;

    #[test]
    fn log_trace_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut v = [3, 1, 2];
            quicksort::sort_by_traced(&mut v, Stability::Stable, i32::cmp, &mut LogTrace);
            assert_eq!(v, [1, 2, 3]);
        });
    }

    #[test]
    fn composed_traces_see_the_same_steps() {
        let mut log = LogTrace;
        let mut rec = Recorder::default();
        let mut snapshots = Vec::new();

        let mut v = [4, 2, 3, 1];
        insertion::sort_by_traced(
            &mut v,
            Stability::Stable,
            i32::cmp,
            &mut |step: Step, s: &[i32]| {
                log.step(step, s);
                rec.step(step, s);
                snapshots.push(s.to_vec());
            },
        );

        assert_eq!(rec.steps.len(), snapshots.len());
        assert_eq!(snapshots.last().map(Vec::as_slice), Some(&v[..]));
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn no_trace_is_silent() {
        let mut rec = Recorder::default();
        let mut v = [1, 2, 3];
        quicksort::sort_by_traced(&mut v, Stability::Unstable, i32::cmp, &mut NoTrace);
        insertion::sort_by_traced(&mut v, Stability::Stable, i32::cmp, &mut rec);
        assert!(rec.steps.is_empty());
    }
}
