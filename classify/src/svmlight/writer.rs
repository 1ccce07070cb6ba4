//! The SVMlight training-data writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encoder::{BooleanOutcomeEncoder, Feature, FeatureVectorEncoder, OutcomeEncoder};
use crate::error::{DataWriteError, EncodeError};

/// File name of the training data written into the output directory.
pub const TRAINING_DATA_FILE: &str = "training-data.svmlight";

/// File name of the persisted encoder state in the output directory.
pub const ENCODERS_FILE: &str = "encoders.json";

/// Encoder state persisted alongside the training data.
///
/// The format is owned by this crate; consumers treat the file as opaque and
/// only ever read it back through [`SvmlightDataWriter::restore_encoders`].
#[derive(Debug, Serialize, Deserialize)]
struct EncoderState {
    features: FeatureVectorEncoder,
    outcome: BooleanOutcomeEncoder,
}

/// Writes binary-classification training instances in the SVMlight format.
///
/// One line per instance: the label token (`+1` or `-1`) followed by
/// `index:value` pairs in ascending index order. Encoding errors surface at
/// [`write`](Self::write) time, not at construction time.
pub struct SvmlightDataWriter {
    output_directory: PathBuf,
    training_file: BufWriter<File>,
    features_encoder: Option<FeatureVectorEncoder>,
    outcome_encoder: Option<BooleanOutcomeEncoder>,
}

impl SvmlightDataWriter {
    /// Creates a writer bound to `output_directory`, creating the directory
    /// and truncating any previous training-data file.
    ///
    /// # Errors
    ///
    /// Returns [`DataWriteError::Io`] if the directory cannot be created or
    /// the training file cannot be opened.
    pub fn new(output_directory: &Path) -> Result<Self, DataWriteError> {
        fs::create_dir_all(output_directory)
            .map_err(|e| DataWriteError::io(output_directory, e))?;
        let training_path = output_directory.join(TRAINING_DATA_FILE);
        let training_file = File::create(&training_path)
            .map(BufWriter::new)
            .map_err(|e| DataWriteError::io(&training_path, e))?;
        Ok(SvmlightDataWriter {
            output_directory: output_directory.to_path_buf(),
            training_file,
            features_encoder: None,
            outcome_encoder: None,
        })
    }

    /// Restores encoder state persisted by an earlier session in this output
    /// directory. Returns `false` when no state file exists. A restored
    /// features encoder is finalized: its dictionary no longer grows.
    ///
    /// # Errors
    ///
    /// Returns [`DataWriteError::Io`] if the state file exists but cannot be
    /// read, and [`DataWriteError::MalformedState`] if it cannot be decoded.
    pub fn restore_encoders(&mut self) -> Result<bool, DataWriteError> {
        let path = self.output_directory.join(ENCODERS_FILE);
        if !path.exists() {
            return Ok(false);
        }
        let content = fs::read_to_string(&path).map_err(|e| DataWriteError::io(&path, e))?;
        let mut state: EncoderState =
            serde_json::from_str(&content).map_err(|source| DataWriteError::MalformedState {
                path: path.clone(),
                source,
            })?;
        state.features.finalize();
        self.features_encoder = Some(state.features);
        self.outcome_encoder = Some(state.outcome);
        Ok(true)
    }

    /// Installs the features encoder.
    pub fn set_features_encoder(&mut self, encoder: FeatureVectorEncoder) {
        self.features_encoder = Some(encoder);
    }

    /// Installs the outcome encoder.
    pub fn set_outcome_encoder(&mut self, encoder: BooleanOutcomeEncoder) {
        self.outcome_encoder = Some(encoder);
    }

    /// The currently installed features encoder, if any.
    #[must_use]
    pub fn features_encoder(&self) -> Option<&FeatureVectorEncoder> {
        self.features_encoder.as_ref()
    }

    /// The currently installed outcome encoder, if any.
    #[must_use]
    pub fn outcome_encoder(&self) -> Option<&BooleanOutcomeEncoder> {
        self.outcome_encoder.as_ref()
    }

    /// Encodes and appends one training instance.
    ///
    /// # Errors
    ///
    /// Returns [`DataWriteError::Encode`] if either encoder is missing or a
    /// feature is accepted by no sub-encoder, and [`DataWriteError::Io`] if
    /// the line cannot be written.
    pub fn write(&mut self, outcome: bool, features: &[Feature]) -> Result<(), DataWriteError> {
        let features_encoder = self
            .features_encoder
            .as_mut()
            .ok_or(EncodeError::MissingFeaturesEncoder)?;
        let vector = features_encoder.encode_all(features)?;

        let outcome_encoder = self
            .outcome_encoder
            .as_ref()
            .ok_or(EncodeError::MissingOutcomeEncoder)?;
        let mut line = BooleanOutcomeEncoder::label(outcome_encoder.encode(outcome)).to_owned();
        for (index, value) in vector.iter() {
            line.push_str(&format!(" {index}:{value}"));
        }

        let training_path = self.output_directory.join(TRAINING_DATA_FILE);
        writeln!(self.training_file, "{line}")
            .map_err(|e| DataWriteError::io(training_path, e))
    }

    /// Flushes the training file and persists the encoder state so a later
    /// session can restore it.
    ///
    /// # Errors
    ///
    /// Returns [`DataWriteError::Encode`] if either encoder is missing and
    /// [`DataWriteError::Io`] if flushing or persisting fails.
    pub fn finish(&mut self) -> Result<(), DataWriteError> {
        let training_path = self.output_directory.join(TRAINING_DATA_FILE);
        self.training_file
            .flush()
            .map_err(|e| DataWriteError::io(training_path, e))?;

        let features = self
            .features_encoder
            .clone()
            .ok_or(EncodeError::MissingFeaturesEncoder)?;
        let outcome = self
            .outcome_encoder
            .ok_or(EncodeError::MissingOutcomeEncoder)?;
        let state = EncoderState { features, outcome };

        let path = self.output_directory.join(ENCODERS_FILE);
        let json = serde_json::to_string_pretty(&state).map_err(|source| {
            DataWriteError::MalformedState {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, json).map_err(|e| DataWriteError::io(&path, e))
    }

    /// The output directory this writer is bound to.
    #[must_use]
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}
