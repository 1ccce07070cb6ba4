//! Features and the typed sub-encoders that turn them into name/number pairs.

use serde::{Deserialize, Serialize};

/// A single feature extracted from an annotation, named and typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name as produced by the extractor (e.g. `"token_length"`).
    pub name: String,
    /// Typed feature value.
    pub value: FeatureValue,
}

impl Feature {
    /// Creates a numeric feature.
    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Feature {
            name: name.into(),
            value: FeatureValue::Number(value),
        }
    }

    /// Creates a boolean feature.
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Feature {
            name: name.into(),
            value: FeatureValue::Boolean(value),
        }
    }

    /// Creates a nominal (string-valued) feature.
    pub fn nominal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Feature {
            name: name.into(),
            value: FeatureValue::Nominal(value.into()),
        }
    }
}

/// The value of a [`Feature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// A real-valued feature.
    Number(f64),
    /// A boolean feature.
    Boolean(bool),
    /// A nominal feature: one value out of an open string vocabulary.
    Nominal(String),
}

impl FeatureValue {
    /// Returns a short tag naming the value type, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureValue::Number(_) => "number",
            FeatureValue::Boolean(_) => "boolean",
            FeatureValue::Nominal(_) => "nominal",
        }
    }
}

/// A named numeric contribution to the feature vector, prior to index lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameNumber {
    /// Dictionary key the contribution is filed under.
    pub name: String,
    /// Numeric value of the contribution.
    pub value: f64,
}

/// A typed sub-encoder of the composite features encoder.
///
/// Each variant accepts exactly one [`FeatureValue`] type. The composite
/// encoder consults its sub-encoders in registration order and the first one
/// that accepts a feature encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubEncoder {
    /// Encodes `Number` values as `(name, value)`.
    Number,
    /// Encodes `Boolean` values as `(name, 1.0)` for true and `(name, 0.0)`
    /// for false. Zero contributions are dropped when the sparse vector is
    /// built, matching the SVMlight convention of omitting zero indices.
    Boolean,
    /// Encodes `Nominal` values as `(name + "_" + value, 1.0)`, giving each
    /// observed string its own dictionary entry.
    Nominal,
}

impl SubEncoder {
    /// Encodes the feature, or returns `None` if this sub-encoder does not
    /// accept the feature's value type.
    #[must_use]
    pub fn encode(&self, feature: &Feature) -> Option<NameNumber> {
        match (self, &feature.value) {
            (SubEncoder::Number, FeatureValue::Number(v)) => Some(NameNumber {
                name: feature.name.clone(),
                value: *v,
            }),
            (SubEncoder::Boolean, FeatureValue::Boolean(b)) => Some(NameNumber {
                name: feature.name.clone(),
                value: if *b { 1.0 } else { 0.0 },
            }),
            (SubEncoder::Nominal, FeatureValue::Nominal(s)) => Some(NameNumber {
                name: format!("{}_{}", feature.name, s),
                value: 1.0,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_encoder_passes_value_through() {
        let nn = SubEncoder::Number.encode(&Feature::number("len", 7.5));
        assert_eq!(
            nn,
            Some(NameNumber {
                name: "len".to_owned(),
                value: 7.5
            })
        );
    }

    #[test]
    fn boolean_encoder_maps_to_unit_and_zero() {
        let t = SubEncoder::Boolean.encode(&Feature::boolean("is_upper", true));
        let f = SubEncoder::Boolean.encode(&Feature::boolean("is_upper", false));
        assert_eq!(t.map(|nn| nn.value), Some(1.0));
        assert_eq!(f.map(|nn| nn.value), Some(0.0));
    }

    #[test]
    fn nominal_encoder_suffixes_the_value() {
        let nn = SubEncoder::Nominal.encode(&Feature::nominal("pos", "NN"));
        assert_eq!(
            nn,
            Some(NameNumber {
                name: "pos_NN".to_owned(),
                value: 1.0
            })
        );
    }

    #[test]
    fn encoders_reject_foreign_value_types() {
        let nominal = Feature::nominal("pos", "NN");
        assert_eq!(SubEncoder::Number.encode(&nominal), None);
        assert_eq!(SubEncoder::Boolean.encode(&nominal), None);
        assert_eq!(SubEncoder::Nominal.encode(&Feature::number("len", 1.0)), None);
    }
}
