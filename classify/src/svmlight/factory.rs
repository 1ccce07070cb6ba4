//! Factory wiring the SVMlight data writer and its default encoder pipeline.

use std::path::PathBuf;

use crate::encoder::{BooleanOutcomeEncoder, FeatureVectorEncoder, Normalizer, SubEncoder};
use crate::error::DataWriteError;
use crate::svmlight::writer::SvmlightDataWriter;

/// Descriptor parameter: the output directory the data writer is bound to.
pub const PARAM_OUTPUT_DIRECTORY: &str =
    "glossa.classify.svmlight.factory.PARAM_OUTPUT_DIRECTORY";

/// Descriptor parameter: whether the factory attempts to restore persisted
/// encoder state from the output directory before wiring the default
/// pipeline.
pub const PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM: &str =
    "glossa.classify.svmlight.factory.PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM";

/// Creates [`SvmlightDataWriter`]s for binary classification.
///
/// The factory first attempts to restore encoder state persisted by an
/// earlier session in the output directory. Only when nothing is restored
/// does it wire the default pipeline: a Euclidean-normalized features
/// encoder with number, boolean, and nominal sub-encoders (in that dispatch
/// order) and the boolean identity outcome encoder.
#[derive(Debug, Clone)]
pub struct SvmlightDataWriterFactory {
    output_directory: PathBuf,
    load_encoders_from_file_system: bool,
}

impl SvmlightDataWriterFactory {
    /// Creates a factory bound to the given output directory. Restoration
    /// from the file system is enabled by default.
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        SvmlightDataWriterFactory {
            output_directory: output_directory.into(),
            load_encoders_from_file_system: true,
        }
    }

    /// Controls whether persisted encoder state is restored before the
    /// default pipeline is considered.
    #[must_use]
    pub fn load_encoders_from_file_system(mut self, load: bool) -> Self {
        self.load_encoders_from_file_system = load;
        self
    }

    /// Creates a data writer, restoring persisted encoders or wiring the
    /// default pipeline.
    ///
    /// No validation beyond wiring happens here; encoding errors surface
    /// when instances are actually written.
    ///
    /// # Errors
    ///
    /// Returns [`DataWriteError`] if the output directory cannot be prepared
    /// or existing encoder state cannot be read back.
    pub fn create_data_writer(&self) -> Result<SvmlightDataWriter, DataWriteError> {
        let mut writer = SvmlightDataWriter::new(&self.output_directory)?;

        let restored = self.load_encoders_from_file_system && writer.restore_encoders()?;
        if !restored {
            let mut features = FeatureVectorEncoder::new(Normalizer::Euclidean);
            features.add_encoder(SubEncoder::Number);
            features.add_encoder(SubEncoder::Boolean);
            features.add_encoder(SubEncoder::Nominal);
            writer.set_features_encoder(features);
            writer.set_outcome_encoder(BooleanOutcomeEncoder);
        }

        Ok(writer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::encoder::Feature;

    #[test]
    fn default_pipeline_has_three_sub_encoders_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let factory = SvmlightDataWriterFactory::new(dir.path());
        let writer = factory.create_data_writer().unwrap();

        let features = writer.features_encoder().unwrap();
        assert_eq!(
            features.encoders(),
            &[SubEncoder::Number, SubEncoder::Boolean, SubEncoder::Nominal]
        );
        assert_eq!(features.normalizer(), Normalizer::Euclidean);
        assert!(!features.is_finalized());
        assert!(writer.outcome_encoder().is_some());
    }

    #[test]
    fn restoration_short_circuits_default_wiring() {
        let dir = tempfile::tempdir().unwrap();
        let factory = SvmlightDataWriterFactory::new(dir.path());

        let mut first = factory.create_data_writer().unwrap();
        first
            .write(true, &[Feature::nominal("pos", "NN"), Feature::number("len", 2.0)])
            .unwrap();
        first.finish().unwrap();

        let second = factory.create_data_writer().unwrap();
        let features = second.features_encoder().unwrap();
        // Restored, not rebuilt: the dictionary survives and is frozen.
        assert!(features.is_finalized());
        assert_eq!(features.dictionary_len(), 2);
    }

    #[test]
    fn restoration_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = SvmlightDataWriterFactory::new(dir.path())
            .create_data_writer()
            .unwrap();
        first.write(true, &[Feature::number("len", 2.0)]).unwrap();
        first.finish().unwrap();

        let second = SvmlightDataWriterFactory::new(dir.path())
            .load_encoders_from_file_system(false)
            .create_data_writer()
            .unwrap();
        let features = second.features_encoder().unwrap();
        assert!(!features.is_finalized());
        assert_eq!(features.dictionary_len(), 0);
    }

    #[test]
    fn param_constants_are_self_referential() {
        assert_eq!(
            PARAM_OUTPUT_DIRECTORY,
            "glossa.classify.svmlight.factory.PARAM_OUTPUT_DIRECTORY"
        );
        assert_eq!(
            PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM,
            "glossa.classify.svmlight.factory.PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM"
        );
    }
}
