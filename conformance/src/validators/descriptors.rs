//! XML component-descriptor naming validator.
//!
//! Walks every `.xml` file under the descriptor root and, for primitive
//! component descriptors, checks each `configurationParameters` and
//! `configurationParameterSettings` name against the parameter registry:
//! the name must split on its last `.` into a registered component path and
//! a field that component declares (existence only — the value-equality
//! convention is the registry validator's job).
//!
//! Aggregate descriptors (`primitive` = false) compose other components and
//! declare no parameters of their own; they are skipped unconditionally, as
//! are files without an `analysisEngineMetaData` element and the
//! hand-authored legacy descriptors in [`EXEMPT_DESCRIPTORS`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::report::{CheckResult, ValidationReport};

/// XML namespace of the component-descriptor format.
pub const RESOURCE_SPECIFIER_NS: &str = "http://uima.apache.org/resourceSpecifier";

/// Descriptor-root-relative paths exempt from validation regardless of
/// content. `legacy/ChunkerParser.xml` predates the naming convention and is
/// kept verbatim for pipeline compatibility.
pub const EXEMPT_DESCRIPTORS: &[&str] = &["legacy/ChunkerParser.xml"];

/// Validates descriptor parameter names against the live registry.
///
/// # Errors
///
/// Returns an error if the walk fails, a file cannot be read, or a
/// descriptor is not well-formed XML.
pub fn validate(descriptor_root: &Path) -> Result<ValidationReport> {
    validate_with_resolver(descriptor_root, &glossa_classify::params::component_declares)
}

/// Validates descriptor parameter names, resolving `<component>.<field>`
/// pairs through `resolver`.
///
/// # Errors
///
/// Returns an error if the walk fails, a file cannot be read, or a
/// descriptor is not well-formed XML.
pub fn validate_with_resolver(
    descriptor_root: &Path,
    resolver: &dyn Fn(&str, &str) -> bool,
) -> Result<ValidationReport> {
    let mut bad_parameters: Vec<String> = Vec::new();
    let mut bad_settings: Vec<String> = Vec::new();
    let mut inspected = 0usize;

    for entry in WalkDir::new(descriptor_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "xml").unwrap_or(false))
    {
        let path = entry.path();
        let relative = path
            .strip_prefix(descriptor_root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");
        if EXEMPT_DESCRIPTORS.contains(&relative.as_str()) {
            continue;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let doc = roxmltree::Document::parse(&content)
            .with_context(|| format!("Failed to parse {} as XML", path.display()))?;
        let root = doc.root_element();

        // Aggregates wire together other components and declare no
        // parameters of their own.
        if let Some(primitive) = ns_child(root, "primitive") {
            let is_primitive = primitive
                .text()
                .map(|t| t.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false);
            if !is_primitive {
                continue;
            }
        }

        let Some(metadata) = ns_child(root, "analysisEngineMetaData") else {
            // Not a component descriptor.
            continue;
        };
        inspected += 1;

        if let Some(parameters) = ns_child(metadata, "configurationParameters") {
            for parameter in ns_children(parameters, "configurationParameter") {
                if let Some(name) = ns_child_text(parameter, "name") {
                    if !parameter_name_resolves(name, resolver) {
                        bad_parameters
                            .push(format!("bad parameter name '{name}' in {}", path.display()));
                    }
                }
            }
        }

        if let Some(settings) = ns_child(metadata, "configurationParameterSettings") {
            for pair in ns_children(settings, "nameValuePair") {
                if let Some(name) = ns_child_text(pair, "name") {
                    if !parameter_name_resolves(name, resolver) {
                        bad_settings
                            .push(format!("bad parameter setting '{name}' in {}", path.display()));
                    }
                }
            }
        }
    }

    let mut report = ValidationReport::new();

    if bad_parameters.is_empty() {
        report.push(CheckResult::pass(
            "params/descriptors",
            format!("All parameter names resolve in {inspected} primitive descriptor(s)"),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "params/descriptors",
            format!("{} descriptor parameters with bad names", bad_parameters.len()),
            bad_parameters,
        ));
    }

    if bad_settings.is_empty() {
        report.push(CheckResult::pass(
            "params/descriptors",
            format!("All parameter-setting names resolve in {inspected} primitive descriptor(s)"),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "params/descriptors",
            format!(
                "{} descriptor parameter settings with bad names",
                bad_settings.len()
            ),
            bad_settings,
        ));
    }

    Ok(report)
}

/// Splits a parameter name on its last `.` and resolves the pair. A name
/// without a separator fails immediately.
fn parameter_name_resolves(name: &str, resolver: &dyn Fn(&str, &str) -> bool) -> bool {
    match name.rsplit_once('.') {
        Some((component, field)) => resolver(component, field),
        None => false,
    }
}

fn ns_child<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|n| {
        n.is_element()
            && n.tag_name().name() == name
            && n.tag_name().namespace() == Some(RESOURCE_SPECIFIER_NS)
    })
}

fn ns_children<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    node.children()
        .filter(|n| {
            n.is_element()
                && n.tag_name().name() == name
                && n.tag_name().namespace() == Some(RESOURCE_SPECIFIER_NS)
        })
        .collect()
}

fn ns_child_text<'a>(node: roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    ns_child(node, name).and_then(|n| n.text()).map(str::trim)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const GOOD_DESCRIPTOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<analysisEngineDescription xmlns="http://uima.apache.org/resourceSpecifier">
  <primitive>true</primitive>
  <analysisEngineMetaData>
    <name>Tokenizer</name>
    <configurationParameters>
      <configurationParameter>
        <name>glossa.example.tokenizer.PARAM_MODEL_FILE</name>
        <type>String</type>
      </configurationParameter>
    </configurationParameters>
    <configurationParameterSettings>
      <nameValuePair>
        <name>glossa.example.tokenizer.PARAM_MODEL_FILE</name>
        <value><string>model.bin</string></value>
      </nameValuePair>
    </configurationParameterSettings>
  </analysisEngineMetaData>
</analysisEngineDescription>
"#;

    fn resolver(component: &str, field: &str) -> bool {
        component == "glossa.example.tokenizer" && field == "PARAM_MODEL_FILE"
    }

    fn run(files: &[(&str, &str)]) -> Result<ValidationReport> {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }
        validate_with_resolver(dir.path(), &resolver)
    }

    #[test]
    fn resolvable_names_pass() {
        let report = run(&[("Tokenizer.xml", GOOD_DESCRIPTOR)]).unwrap();
        assert!(report.all_passed());
    }

    #[test]
    fn separator_free_name_fails_immediately() {
        let descriptor = GOOD_DESCRIPTOR.replace(
            "<name>glossa.example.tokenizer.PARAM_MODEL_FILE</name>\n        <type>String</type>",
            "<name>PARAM_MODEL_FILE</name>\n        <type>String</type>",
        );
        let report = run(&[("Tokenizer.xml", descriptor.as_str())]).unwrap();
        assert_eq!(report.failure_count(), 1);
        assert!(report.results[0].message.contains("1 descriptor parameters"));
    }

    #[test]
    fn unresolvable_setting_is_reported_in_its_own_list() {
        let descriptor = GOOD_DESCRIPTOR.replace(
            "<name>glossa.example.tokenizer.PARAM_MODEL_FILE</name>\n        <value>",
            "<name>glossa.example.sentence.PARAM_MODEL_FILE</name>\n        <value>",
        );
        let report = run(&[("Tokenizer.xml", descriptor.as_str())]).unwrap();
        assert_eq!(report.failure_count(), 1);
        let failing = report.results.iter().find(|r| r.is_failure()).unwrap();
        assert!(failing.message.contains("parameter settings"));
    }

    #[test]
    fn aggregates_are_never_inspected() {
        let aggregate = GOOD_DESCRIPTOR
            .replace("<primitive>true</primitive>", "<primitive>false</primitive>")
            .replace("PARAM_MODEL_FILE", "PARAM_BOGUS");
        let report = run(&[("Pipeline.xml", aggregate.as_str())]).unwrap();
        assert!(report.all_passed());
    }

    #[test]
    fn files_without_engine_metadata_are_skipped() {
        let other = r#"<?xml version="1.0"?>
<typeSystemDescription xmlns="http://uima.apache.org/resourceSpecifier">
  <name>Types</name>
</typeSystemDescription>
"#;
        let report = run(&[("Types.xml", other)]).unwrap();
        assert!(report.all_passed());
    }

    #[test]
    fn exempt_legacy_descriptor_is_skipped_regardless_of_content() {
        let broken = GOOD_DESCRIPTOR.replace("PARAM_MODEL_FILE", "not_even_close");
        let report = run(&[("legacy/ChunkerParser.xml", broken.as_str())]).unwrap();
        assert!(report.all_passed());
    }

    #[test]
    fn malformed_xml_propagates_as_an_error() {
        let err = run(&[("Broken.xml", "<analysisEngineDescription>")]).unwrap_err();
        assert!(err.to_string().contains("as XML"));
    }
}
