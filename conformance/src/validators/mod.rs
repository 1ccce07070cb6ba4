//! Naming-convention validators.
//!
//! Three independent checks over the same convention — a configuration
//! parameter is named `<component>.<PARAM_CONSTANT>` where `component` is
//! the dotted root-relative module path of the declaring component:
//!
//! - [`registry`]: every entry in the live parameter registry carries a
//!   self-referential value.
//! - [`sources`]: every `pub const PARAM_*` literal in the source tree
//!   matches the module path derived from its file location.
//! - [`descriptors`]: every parameter and parameter-setting name in a
//!   primitive XML component descriptor resolves against the registry.

pub mod descriptors;
pub mod registry;
pub mod sources;
