//! `glossa-conformance` — validates parameter naming across the workspace.
//!
//! Runs the registry, source-tree, and XML-descriptor validators and prints
//! one line per check with itemized violations underneath.
//!
//! **Usage:**
//! ```
//! glossa-conformance [--workspace <path>] [--descriptors <path>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use glossa_conformance::{run_all, Severity, WorkspacePaths};

/// Run the Glossa conformance suite.
#[derive(Parser)]
#[command(
    name = "glossa-conformance",
    about = "Validate Glossa parameter naming across registry, sources, and descriptors"
)]
struct Args {
    /// Path to the workspace root (default: current directory).
    #[arg(long, default_value = ".")]
    workspace: PathBuf,

    /// Path to the descriptor tree (default: <workspace>/descriptors).
    #[arg(long)]
    descriptors: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut paths = WorkspacePaths::for_workspace(args.workspace);
    if let Some(descriptors) = args.descriptors {
        paths.descriptors = descriptors;
    }

    let report = run_all(&paths)?;

    println!("Glossa Conformance Report");
    println!("=========================");
    println!();

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut warned = 0usize;

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => {
                passed += 1;
                "PASS"
            }
            Severity::Warning => {
                warned += 1;
                "WARN"
            }
            Severity::Failure => {
                failed += 1;
                "FAIL"
            }
        };
        println!("[{}] {} — {}", status, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    println!();
    println!("Summary: {passed} passed, {warned} warnings, {failed} failed");

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
