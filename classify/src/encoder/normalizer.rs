//! Name/number vector normalization applied before index lookup.

use serde::{Deserialize, Serialize};

use crate::encoder::features::NameNumber;

/// Normalization strategy for the encoded name/number contributions of one
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalizer {
    /// Divides every value by the Euclidean magnitude of the vector. A
    /// zero-magnitude vector is left untouched.
    Euclidean,
    /// Leaves the values as produced by the sub-encoders.
    NoOp,
}

impl Normalizer {
    /// Normalizes the contributions of one instance in place.
    pub fn normalize(&self, values: &mut [NameNumber]) {
        match self {
            Normalizer::NoOp => {}
            Normalizer::Euclidean => {
                let magnitude = values
                    .iter()
                    .map(|nn| nn.value * nn.value)
                    .sum::<f64>()
                    .sqrt();
                if magnitude > 0.0 {
                    for nn in values.iter_mut() {
                        nn.value /= magnitude;
                    }
                }
            }
        }
    }
}
