//! Glossa conformance suite.
//!
//! Enforces the configuration-parameter naming convention across the whole
//! workspace: a parameter is named `<component>.<PARAM_CONSTANT>` where
//! `component` is the dotted root-relative module path of the declaring
//! component. Three validators check the convention from three directions —
//! the live parameter registry, the source tree, and the XML component
//! descriptors — and accumulate every violation before failing.
//!
//! # Entry Point
//!
//! ```no_run
//! use glossa_conformance::{run_all, WorkspacePaths};
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths::for_workspace(PathBuf::from("."));
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

pub mod report;
pub mod validators;

pub use report::{CheckResult, Severity, ValidationReport};

/// One source tree to scan for `PARAM_*` constants.
#[derive(Debug, Clone)]
pub struct SourceRoot {
    /// Dotted name prefix of modules under this root
    /// (e.g. `glossa.classify`).
    pub base: String,
    /// Directory the crate's modules live in (e.g. `classify/src`).
    pub root: PathBuf,
}

/// Paths the conformance runner operates on.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Root of the Cargo workspace.
    pub workspace: PathBuf,
    /// Source trees scanned by the sources validator.
    pub source_roots: Vec<SourceRoot>,
    /// Directory holding the XML component descriptors.
    pub descriptors: PathBuf,
}

impl WorkspacePaths {
    /// Standard paths for a checkout of this workspace: the classify crate's
    /// sources and the top-level `descriptors/` tree.
    #[must_use]
    pub fn for_workspace(workspace: PathBuf) -> Self {
        let source_roots = vec![SourceRoot {
            base: "glossa.classify".to_owned(),
            root: workspace.join("classify").join("src"),
        }];
        let descriptors = workspace.join("descriptors");
        WorkspacePaths {
            workspace,
            source_roots,
            descriptors,
        }
    }
}

/// Runs all validators and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Parameter registry (no file I/O)
/// 2. Source-tree `PARAM_*` constants
/// 3. XML component descriptors
///
/// # Errors
///
/// Returns an error if a file system operation fails, a descriptor is
/// malformed XML, or the source tree declares parameters the registry does
/// not know.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ValidationReport> {
    let mut report = ValidationReport::new();

    report.extend(validators::registry::validate());
    report.extend(validators::sources::validate(&paths.source_roots)?);
    report.extend(validators::descriptors::validate(&paths.descriptors)?);

    Ok(report)
}
