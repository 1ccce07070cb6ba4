//! Source-tree parameter naming validator.
//!
//! Walks every `.rs` file under the configured source roots, finds each
//! `pub const PARAM_*` string constant, and requires its literal value to be
//! `<derived.module.path>.<CONST_NAME>`, where the module path is computed
//! root-relatively from the file location (no fixed path-prefix offsets).
//!
//! A file that declares `PARAM_*` constants under a module path the
//! parameter registry does not know aborts the run with a hard error: that
//! indicates the registry and the source tree have drifted apart, which is a
//! build inconsistency rather than a recordable naming violation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use regex::Regex;
use walkdir::WalkDir;

use crate::report::{CheckResult, ValidationReport};
use crate::SourceRoot;

/// One `pub const PARAM_*` declaration found in the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamConst {
    /// File the constant was found in.
    pub file: PathBuf,
    /// Dotted module path derived from the file's root-relative location.
    pub module: String,
    /// Constant name.
    pub field: String,
    /// The string literal the constant is assigned.
    pub value: String,
}

/// Validates `PARAM_*` constants under the given source roots against the
/// live parameter registry.
///
/// # Errors
///
/// Returns an error if a source file cannot be read or if a scanned module
/// declares parameters but is absent from the registry.
pub fn validate(source_roots: &[SourceRoot]) -> Result<ValidationReport> {
    let consts = scan(source_roots)?;
    check_consts(&consts, &glossa_classify::params::component_exists)
}

/// Scans the source roots for `pub const PARAM_*: &str = "…";` declarations.
///
/// # Errors
///
/// Returns an error if a directory walk or file read fails.
pub fn scan(source_roots: &[SourceRoot]) -> Result<Vec<ParamConst>> {
    let pattern = Regex::new(r#"pub const (PARAM_[A-Z0-9_]+)\s*:\s*&str\s*=\s*"([^"]*)""#)
        .context("invalid PARAM constant pattern")?;

    let mut consts: Vec<ParamConst> = Vec::new();
    for source_root in source_roots {
        for entry in WalkDir::new(&source_root.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "rs").unwrap_or(false))
        {
            let path = entry.path();
            let relative = path.strip_prefix(&source_root.root).with_context(|| {
                format!(
                    "{} is not under source root {}",
                    path.display(),
                    source_root.root.display()
                )
            })?;
            let module = module_path(&source_root.base, relative);
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            for capture in pattern.captures_iter(&content) {
                consts.push(ParamConst {
                    file: path.to_path_buf(),
                    module: module.clone(),
                    field: capture[1].to_owned(),
                    value: capture[2].to_owned(),
                });
            }
        }
    }
    Ok(consts)
}

/// Checks scanned constants for self-referential values. `component_known`
/// answers whether a module path is present in the parameter registry.
///
/// # Errors
///
/// Returns an error for the first constant whose module path the registry
/// does not know (registry/source drift aborts the run).
pub fn check_consts(
    consts: &[ParamConst],
    component_known: &dyn Fn(&str) -> bool,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new();
    let mut violations: Vec<String> = Vec::new();

    for param in consts {
        if !component_known(&param.module) {
            bail!(
                "{} declares {} but component `{}` is not in the parameter registry",
                param.file.display(),
                param.field,
                param.module
            );
        }
        let expected = format!("{}.{}", param.module, param.field);
        if param.value != expected {
            violations.push(format!(
                "{}: '{}' should be '{}'",
                param.file.display(),
                param.value,
                expected
            ));
        }
    }

    if violations.is_empty() {
        report.push(CheckResult::pass(
            "params/sources",
            format!(
                "All {} PARAM constants match their module paths",
                consts.len()
            ),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "params/sources",
            format!("{} descriptor parameters with bad names", violations.len()),
            violations,
        ));
    }

    Ok(report)
}

/// Derives the dotted module path for a source file relative to its root.
///
/// `svmlight/factory.rs` under base `glossa.classify` becomes
/// `glossa.classify.svmlight.factory`; `lib.rs`, `mod.rs`, and `main.rs`
/// fold into their parent module.
#[must_use]
pub fn module_path(base: &str, relative: &Path) -> String {
    let mut parts: Vec<String> = vec![base.to_owned()];
    for component in relative.components() {
        let name = component.as_os_str().to_string_lossy();
        let name = name.strip_suffix(".rs").unwrap_or(&name);
        if matches!(name, "lib" | "mod" | "main") {
            continue;
        }
        parts.push(name.to_owned());
    }
    parts.join(".")
}
