use std::cmp::Ordering;
use std::fmt;

/// A labelled key. Sorting only ever looks at `key`, `label` rides along so that the relative
/// order of equal keys stays observable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element<K> {
    pub label: String,
    pub key: K,
}

impl<K> Element<K> {
    pub fn new(label: impl Into<String>, key: K) -> Self {
        Self {
            label: label.into(),
            key,
        }
    }
}

impl<K: Ord> Element<K> {
    /// Comparison used by all sorts over elements, ignores the label.
    #[inline]
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, L: Into<String>> From<(L, K)> for Element<K> {
    fn from((label, key): (L, K)) -> Self {
        Self::new(label, key)
    }
}

impl<K: fmt::Display> fmt::Display for Element<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.label, self.key)
    }
}

/// Formats a slice of elements as `[("first", 3), ("", 4)]`.
pub fn display_slice<K: fmt::Display>(v: &[Element<K>]) -> String {
    let inner = v
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{inner}]")
}

/// Builds a vec of elements from `(label, key)` tuples.
pub fn elements<K: Clone>(pairs: &[(&str, K)]) -> Vec<Element<K>> {
    pairs
        .iter()
        .map(|(label, key)| Element::new(*label, key.clone()))
        .collect()
}
