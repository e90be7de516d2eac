//! Domain constants for the Custom Elements Manifest schema.

/// Schema version written by [`Package::new`](crate::manifest::Package::new).
pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

/// Default manifest file name inside a package.
pub const DEFAULT_MANIFEST_FILE: &str = "custom-elements.json";

// ============================================================================
// KIND DISCRIMINATORS
// ============================================================================

/// `kind` of a module.
pub const KIND_JAVASCRIPT_MODULE: &str = "javascript-module";

/// `kind` of a class declaration (upgraded by `customElement: true`).
pub const KIND_CLASS: &str = "class";
/// `kind` of a mixin declaration (upgraded by `customElement: true`).
pub const KIND_MIXIN: &str = "mixin";
/// `kind` of a function declaration.
pub const KIND_FUNCTION: &str = "function";
/// `kind` of a variable declaration.
pub const KIND_VARIABLE: &str = "variable";

/// `kind` of a field member.
pub const KIND_FIELD: &str = "field";
/// `kind` of a method member.
pub const KIND_METHOD: &str = "method";

/// `kind` of a JavaScript export.
pub const KIND_JS_EXPORT: &str = "js";
/// `kind` of a custom element definition (export, or legacy declaration).
pub const KIND_CUSTOM_ELEMENT_DEFINITION: &str = "custom-element-definition";

// ============================================================================
// VARIANT MARKER KEYS
// ============================================================================

/// Field keys whose non-null presence upgrades a `field` member to a custom element field.
pub const CUSTOM_ELEMENT_FIELD_KEYS: &[&str] = &["attribute", "reflects"];

/// Boolean flag upgrading classes and mixins to their custom element variants.
pub const CUSTOM_ELEMENT_FLAG: &str = "customElement";
