//! Feature and outcome encoders.
//!
//! The composite [`FeatureVectorEncoder`] dispatches each feature to the
//! first registered [`SubEncoder`] that accepts its value type, normalizes
//! the resulting name/number contributions, and maps names to stable
//! dictionary indices to build a sparse [`FeatureVector`]. The whole encoder
//! is serde-serializable so a data writer can persist its state and a later
//! session can restore it instead of rebuilding the default pipeline.

pub mod features;
pub mod normalizer;
pub mod vector;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use features::{Feature, FeatureValue, NameNumber, SubEncoder};
pub use normalizer::Normalizer;
pub use vector::FeatureVector;

use crate::error::EncodeError;

/// Composite features encoder: ordered sub-encoders, a normalizer, and a
/// name-to-index dictionary.
///
/// While the encoder is not finalized, unseen names are allocated fresh
/// 1-based indices. A finalized encoder (one restored from persisted state)
/// never grows: contributions under unknown names are silently dropped, so
/// classification-time data lines up with the dictionary the model was
/// trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVectorEncoder {
    normalizer: Normalizer,
    encoders: Vec<SubEncoder>,
    dictionary: BTreeMap<String, usize>,
    next_index: usize,
    finalized: bool,
}

impl FeatureVectorEncoder {
    /// Creates an empty encoder with the given normalizer and no
    /// sub-encoders.
    #[must_use]
    pub fn new(normalizer: Normalizer) -> Self {
        FeatureVectorEncoder {
            normalizer,
            encoders: Vec::new(),
            dictionary: BTreeMap::new(),
            next_index: 1,
            finalized: false,
        }
    }

    /// Registers a sub-encoder. Registration order is dispatch priority:
    /// the first sub-encoder that accepts a feature encodes it.
    pub fn add_encoder(&mut self, encoder: SubEncoder) {
        self.encoders.push(encoder);
    }

    /// The registered sub-encoders in dispatch order.
    #[must_use]
    pub fn encoders(&self) -> &[SubEncoder] {
        &self.encoders
    }

    /// The normalizer applied to every instance.
    #[must_use]
    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    /// Number of names in the dictionary.
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Whether the dictionary is frozen.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Freezes the dictionary. Subsequent unseen names are dropped instead
    /// of being allocated indices.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    /// Encodes one instance's features into a sparse vector.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnsupportedFeature`] if a feature's value type
    /// is accepted by none of the registered sub-encoders.
    pub fn encode_all(&mut self, features: &[Feature]) -> Result<FeatureVector, EncodeError> {
        let mut contributions: Vec<NameNumber> = Vec::with_capacity(features.len());
        for feature in features {
            let encoded = self
                .encoders
                .iter()
                .find_map(|encoder| encoder.encode(feature))
                .ok_or_else(|| EncodeError::UnsupportedFeature {
                    name: feature.name.clone(),
                    kind: feature.value.kind(),
                })?;
            contributions.push(encoded);
        }

        self.normalizer.normalize(&mut contributions);

        let mut vector = FeatureVector::new();
        for contribution in contributions {
            let index = match self.dictionary.get(&contribution.name) {
                Some(&index) => index,
                None if self.finalized => continue,
                None => {
                    let index = self.next_index;
                    self.next_index += 1;
                    self.dictionary.insert(contribution.name, index);
                    index
                }
            };
            vector.set(index, contribution.value);
        }
        Ok(vector)
    }
}

/// The outcome-encoding seam: maps a class label to the representation the
/// training format expects.
pub trait OutcomeEncoder {
    /// Class label type as produced by the pipeline.
    type Outcome;
    /// Encoded label type as consumed by the training format.
    type Encoded;

    /// Encodes one outcome.
    fn encode(&self, outcome: Self::Outcome) -> Self::Encoded;
}

/// Identity encoder for binary outcomes.
///
/// Exists to satisfy the [`OutcomeEncoder`] seam; the SVMlight writer renders
/// the encoded boolean as `+1` / `-1` in the label column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanOutcomeEncoder;

impl OutcomeEncoder for BooleanOutcomeEncoder {
    type Outcome = bool;
    type Encoded = bool;

    fn encode(&self, outcome: bool) -> bool {
        outcome
    }
}

impl BooleanOutcomeEncoder {
    /// Renders an encoded outcome as an SVMlight label token.
    #[must_use]
    pub fn label(encoded: bool) -> &'static str {
        if encoded {
            "+1"
        } else {
            "-1"
        }
    }
}
