//! Selection sort, insertion sort and quicksort, each with a stable and an unstable tie-breaking
//! policy.
//!
//! Every algorithm module exposes `sort_by_traced` as its core, and the `sort`, `sort_by`,
//! `sort_by_key` and `sort_elements` front ends generated by `sort_frontend!`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::trace::Trace;

macro_rules! sort_frontend {
    () => {
        /// Sorts `v` ascending by `Ord`.
        #[inline]
        pub fn sort<T: Ord>(v: &mut [T], stability: $crate::sorts::Stability) {
            sort_by_traced(v, stability, T::cmp, &mut $crate::trace::NoTrace);
        }

        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], stability: $crate::sorts::Stability, compare: F)
        where
            F: FnMut(&T, &T) -> ::std::cmp::Ordering,
        {
            sort_by_traced(v, stability, compare, &mut $crate::trace::NoTrace);
        }

        #[inline]
        pub fn sort_by_key<T, K, F>(v: &mut [T], stability: $crate::sorts::Stability, mut f: F)
        where
            K: Ord,
            F: FnMut(&T) -> K,
        {
            sort_by_traced(
                v,
                stability,
                |a, b| f(a).cmp(&f(b)),
                &mut $crate::trace::NoTrace,
            );
        }

        /// Sorts labelled elements by key only, reporting every step to `trace`.
        #[inline]
        pub fn sort_elements<K, R>(
            v: &mut [$crate::Element<K>],
            stability: $crate::sorts::Stability,
            trace: &mut R,
        ) where
            K: Ord,
            R: $crate::trace::Trace<$crate::Element<K>>,
        {
            sort_by_traced(v, stability, $crate::Element::cmp_key, trace);
        }
    };
}

pub mod insertion;
pub mod quicksort;
pub mod selection;

/// Tie-breaking policy for elements that compare equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Equal elements keep their relative input order.
    #[default]
    Stable,
    /// No ordering guarantee among equal elements.
    Unstable,
}

impl Stability {
    #[inline]
    pub fn is_stable(self) -> bool {
        self == Stability::Stable
    }
}

impl From<bool> for Stability {
    fn from(stable: bool) -> Self {
        if stable {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stability::Stable => f.write_str("stable"),
            Stability::Unstable => f.write_str("unstable"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Selection, Algorithm::Insertion, Algorithm::Quick];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
        }
    }

    /// Runs this algorithm over the whole slice.
    pub fn sort_by_traced<T, F, R>(self, v: &mut [T], stability: Stability, compare: F, trace: &mut R)
    where
        F: FnMut(&T, &T) -> Ordering,
        R: Trace<T>,
    {
        match self {
            Algorithm::Selection => selection::sort_by_traced(v, stability, compare, trace),
            Algorithm::Insertion => insertion::sort_by_traced(v, stability, compare, trace),
            Algorithm::Quick => quicksort::sort_by_traced(v, stability, compare, trace),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort algorithm `{0}`, expected one of selection, insertion, quick")]
pub struct UnknownAlgorithm(String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
