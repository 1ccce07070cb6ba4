//! Glossa classifier data-writing layer.
//!
//! This crate covers the training-data side of Glossa's SVM-backed binary
//! classifiers: typed feature encoders, Euclidean vector normalization, the
//! SVMlight training-data writer, and the factory that wires the default
//! encoder pipeline (or restores a previously persisted one from the output
//! directory).
//!
//! # Entry Point
//!
//! ```no_run
//! use glossa_classify::svmlight::SvmlightDataWriterFactory;
//! use glossa_classify::encoder::Feature;
//!
//! let factory = SvmlightDataWriterFactory::new("target/model");
//! let mut writer = factory.create_data_writer().expect("Failed to create data writer");
//! writer
//!     .write(true, &[Feature::number("token_length", 5.0)])
//!     .expect("Failed to write instance");
//! writer.finish().expect("Failed to finish");
//! ```
//!
//! # Parameter Registry
//!
//! Every configuration parameter a Glossa component exposes is declared as a
//! `pub const PARAM_*` and registered in [`params::registry()`]. The
//! `glossa-conformance` crate validates that registry against both the source
//! tree and the XML component descriptors.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod encoder;
pub mod error;
pub mod params;
pub mod svmlight;

pub use error::{DataWriteError, EncodeError};
pub use params::ParamDescriptor;
