//! Input patterns for demos and benchmarks, plus the process wide seed used by the random
//! generators.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

use crate::element::{elements, Element};

// --- Public ---

/// The demonstration input for selection and insertion sort.
pub fn demo() -> Vec<Element<i32>> {
    elements(&[("", 4), ("", 5), ("first", 3), ("second", 3)])
}

/// The demonstration input for quicksort.
pub fn demo_quick() -> Vec<Element<i32>> {
    elements(&[("first", 3), ("", 5), ("", 4), ("second", 3)])
}

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = seeded_rng();
    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = seeded_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

/// Labels every key with its occurrence number, `[3, 1, 3]` becomes
/// `[("3#0", 3), ("1#0", 1), ("3#1", 3)]`. A stable sort keeps the occurrence numbers of equal
/// keys ascending.
pub fn with_occurrence_labels(keys: &[i32]) -> Vec<Element<i32>> {
    let mut seen = std::collections::HashMap::<i32, usize>::new();

    keys.iter()
        .map(|&key| {
            let nth = seen.entry(key).or_default();
            let label = format!("{key}#{nth}");
            *nth += 1;
            Element::new(label, key)
        })
        .collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every subsequent [`random_init_seed`] call draw a fresh seed.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Seed shared by all random generators of this process. Taken from the `OVERRIDE_SEED` environment
/// variable if set, otherwise drawn once.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 {
            match env::var("OVERRIDE_SEED").ok().map(|s| u64::from_str(&s)) {
                Some(Ok(seed)) => seed,
                Some(Err(err)) => {
                    tracing::warn!(%err, "ignoring malformed OVERRIDE_SEED");
                    thread_rng().gen()
                }
                None => thread_rng().gen(),
            }
        })
    } else {
        thread_rng().gen()
    }
}

/// A fresh generator seeded from [`random_init_seed`].
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
