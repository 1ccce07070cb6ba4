//! Sparse feature vector in the SVMlight index convention.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A sparse feature vector: ordered map from 1-based index to value.
///
/// Zero values are never stored; iteration yields entries in ascending index
/// order, which is the order the SVMlight training format requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    entries: BTreeMap<usize, f64>,
}

impl FeatureVector {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        FeatureVector {
            entries: BTreeMap::new(),
        }
    }

    /// Sets the value at `index`. Setting a value to zero removes the entry.
    pub fn set(&mut self, index: usize, value: f64) {
        if value == 0.0 {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }

    /// Returns the value at `index`, or `0.0` if the entry is absent.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vector has no non-zero entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }
}
