//! Parameter-registry naming validator.
//!
//! Walks the live registry from `glossa-classify` (no file I/O) and checks
//! that every descriptor's value is exactly `<component>.<field>` and that
//! every registered field name contains `PARAM`.

use glossa_classify::params::{self, ParamDescriptor};

use crate::report::{CheckResult, ValidationReport};

/// Validates the live parameter registry.
#[must_use]
pub fn validate() -> ValidationReport {
    check_descriptors(params::registry())
}

/// Validates a slice of parameter descriptors. Mismatches are collected,
/// never short-circuited.
#[must_use]
pub fn check_descriptors(descriptors: &[ParamDescriptor]) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut violations: Vec<String> = Vec::new();

    for descriptor in descriptors {
        if !descriptor.field.contains("PARAM") {
            violations.push(format!(
                "field `{}` on {} is registered as a parameter but its name does not contain PARAM",
                descriptor.field, descriptor.component
            ));
        }
        let expected = format!("{}.{}", descriptor.component, descriptor.field);
        if descriptor.value != expected {
            violations.push(format!("'{}' should be '{}'", descriptor.value, expected));
        }
    }

    if violations.is_empty() {
        report.push(CheckResult::pass(
            "params/registry",
            format!(
                "All {} registered parameters carry self-referential names",
                descriptors.len()
            ),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "params/registry",
            format!("{} descriptor parameters with bad names", violations.len()),
            violations,
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_registry_passes() {
        assert!(validate().all_passed());
    }

    #[test]
    fn bare_field_value_is_reported() {
        let descriptors = [ParamDescriptor {
            component: "glossa.example.tokenizer",
            field: "PARAM_MODEL_FILE",
            value: "PARAM_MODEL_FILE",
        }];
        let report = check_descriptors(&descriptors);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.results[0].details,
            vec![
                "'PARAM_MODEL_FILE' should be 'glossa.example.tokenizer.PARAM_MODEL_FILE'"
                    .to_owned()
            ]
        );
    }

    #[test]
    fn wrong_component_prefix_is_reported() {
        let descriptors = [ParamDescriptor {
            component: "glossa.example.tokenizer",
            field: "PARAM_MODEL_FILE",
            value: "glossa.example.sentence.PARAM_MODEL_FILE",
        }];
        let report = check_descriptors(&descriptors);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn all_mismatches_are_itemized() {
        let descriptors = [
            ParamDescriptor {
                component: "glossa.example.a",
                field: "PARAM_X",
                value: "PARAM_X",
            },
            ParamDescriptor {
                component: "glossa.example.b",
                field: "PARAM_Y",
                value: "glossa.example.b.PARAM_Y",
            },
            ParamDescriptor {
                component: "glossa.example.c",
                field: "PARAM_Z",
                value: "wrong",
            },
        ];
        let report = check_descriptors(&descriptors);
        assert_eq!(report.results[0].details.len(), 2);
        assert!(report.results[0].message.starts_with("2 "));
    }

    #[test]
    fn non_param_field_name_is_reported() {
        let descriptors = [ParamDescriptor {
            component: "glossa.example.a",
            field: "MODEL_FILE",
            value: "glossa.example.a.MODEL_FILE",
        }];
        let report = check_descriptors(&descriptors);
        assert_eq!(report.failure_count(), 1);
    }
}
