//! "k nearest numbers": looks up the phone numbers in a file that are closest to a target.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::phone::{self, PhoneError};

#[derive(Debug, Error)]
pub enum NearestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid target number: {0}")]
    InvalidTarget(#[from] PhoneError),

    #[error("k must be greater than 0")]
    ZeroK,
}

pub type NearestResult<T> = Result<T, NearestError>;

/// Returns the numbers closest to `target`, nearest first.
///
/// Distinct numbers are grouped by their distance to `target` and whole groups are taken until at
/// least `k` distinct numbers have been collected, so ties at the cut-off are all included. Each
/// number is repeated as often as it occurs in `numbers`, and a group is listed in ascending
/// order.
pub fn k_nearest(numbers: &[u64], target: u64, k: usize) -> Vec<u64> {
    let mut occurrences: HashMap<u64, usize> = HashMap::new();
    for &number in numbers {
        *occurrences.entry(number).or_default() += 1;
    }

    let mut by_distance: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for &number in occurrences.keys() {
        by_distance
            .entry(number.abs_diff(target))
            .or_default()
            .push(number);
    }

    let mut nearest = Vec::new();
    let mut distinct = 0;
    for (distance, mut group) in by_distance {
        if distinct >= k {
            break;
        }

        group.sort_unstable();
        tracing::trace!(distance, ?group, "taking distance group");

        for number in group {
            distinct += 1;
            let count = occurrences[&number];
            nearest.extend(std::iter::repeat(number).take(count));
        }
    }

    nearest
}

/// Reads phone numbers from `path`, one per line in any notation [`phone::sanitize`] accepts, and
/// returns the `k` nearest to `target`, see [`k_nearest`]. Lines that are not valid phone numbers
/// are skipped.
pub fn find_nearest(path: impl AsRef<Path>, target: &str, k: usize) -> NearestResult<Vec<u64>> {
    let path = path.as_ref();

    if k == 0 {
        return Err(NearestError::ZeroK);
    }
    let target = phone::sanitize(target)?;

    let contents = fs::read_to_string(path).map_err(|source| NearestError::Io {
        path: path.to_owned(),
        source,
    })?;
    let numbers = phone::extract_all(&contents);
    tracing::debug!(path = %path.display(), count = numbers.len(), target, k, "loaded numbers");

    Ok(k_nearest(&numbers, target, k))
}
