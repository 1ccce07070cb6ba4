//! The configuration-parameter registry.
//!
//! Glossa components expose their configuration parameters as
//! `pub const PARAM_*` string constants whose value is the dotted
//! root-relative module path followed by the constant name, e.g.
//! `glossa.classify.svmlight.factory.PARAM_OUTPUT_DIRECTORY`. The same name
//! appears verbatim in the component's XML descriptor.
//!
//! This module is the explicit manifest of every parameter-bearing
//! component: each descriptor records the component path, the constant name,
//! and the constant's value. The `glossa-conformance` suite walks this
//! registry (instead of reflecting over compiled artifacts) to enforce the
//! naming convention, and resolves descriptor-XML parameter names against it.

use std::sync::OnceLock;

/// One registered configuration parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Dotted root-relative module path of the declaring component
    /// (e.g. `glossa.classify.svmlight.factory`).
    pub component: &'static str,
    /// Name of the declaring `PARAM_*` constant.
    pub field: &'static str,
    /// The constant's value. The naming convention requires this to equal
    /// `<component>.<field>` exactly.
    pub value: &'static str,
}

/// Dotted module path of the SVMlight writer factory component.
pub const SVMLIGHT_FACTORY: &str = "glossa.classify.svmlight.factory";

/// Returns the registry of every parameter-bearing Glossa component.
///
/// Built once per process. Components are listed in crate definition order.
#[must_use]
pub fn registry() -> &'static [ParamDescriptor] {
    static REGISTRY: OnceLock<Vec<ParamDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            ParamDescriptor {
                component: SVMLIGHT_FACTORY,
                field: "PARAM_OUTPUT_DIRECTORY",
                value: crate::svmlight::factory::PARAM_OUTPUT_DIRECTORY,
            },
            ParamDescriptor {
                component: SVMLIGHT_FACTORY,
                field: "PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM",
                value: crate::svmlight::factory::PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM,
            },
        ]
    })
}

/// Returns true if `component` is a registered component path.
#[must_use]
pub fn component_exists(component: &str) -> bool {
    registry().iter().any(|d| d.component == component)
}

/// Returns true if `component` declares `field`. Existence only; the
/// value-equality convention is checked separately by the conformance suite.
#[must_use]
pub fn component_declares(component: &str, field: &str) -> bool {
    registry()
        .iter()
        .any(|d| d.component == component && d.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_the_factory_parameters() {
        assert!(component_declares(SVMLIGHT_FACTORY, "PARAM_OUTPUT_DIRECTORY"));
        assert!(component_declares(
            SVMLIGHT_FACTORY,
            "PARAM_LOAD_ENCODERS_FROM_FILE_SYSTEM"
        ));
        assert_eq!(registry().len(), 2);
    }

    #[test]
    fn unknown_components_and_fields_do_not_resolve() {
        assert!(!component_exists("glossa.classify.svmlight.writer"));
        assert!(!component_declares(SVMLIGHT_FACTORY, "PARAM_UNKNOWN"));
    }

    #[test]
    fn every_registered_value_is_self_referential() {
        for descriptor in registry() {
            assert_eq!(
                descriptor.value,
                format!("{}.{}", descriptor.component, descriptor.field),
                "mis-named parameter constant: {}",
                descriptor.value
            );
        }
    }
}
