//! # cem-manifest
//!
//! Document model, decoder and inheritance flattening for Custom Elements
//! Manifests (`custom-elements.json`).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project     → Workspace boundary, Settings, ManifestLoader
//!   ↓
//! analysis    → ManifestHost: memoized flattening, lookups, tag queries
//!   ↓
//! semantic    → Reference resolution, merge rules, flattening
//!   ↓
//! interchange → Variant decoder / encoder for the JSON document
//!   ↓
//! manifest    → Document model (Package, Module, Declaration, ...)
//!   ↓
//! base        → Constants, module path normalization
//! ```

// ============================================================================
// MODULES (dependency order, lowest layer first)
// ============================================================================

/// Foundation: kind strings, schema defaults, path normalization
pub mod base;

/// Document model: packages, modules, declarations, members, facets
pub mod manifest;

/// JSON decoding and encoding with `kind` dispatch
pub mod interchange;

/// Reference resolution and inheritance flattening
pub mod semantic;

/// Compute-once caches and name-based lookups over one document
pub mod analysis;

/// Workspace loading and configuration
pub mod project;

// Re-export the entry points most callers need
pub use analysis::{ManifestHost, QueryError};
pub use interchange::{DecodeError, DecodeErrors, Decoded, decode, encode};
pub use manifest::{CustomElementDeclaration, Declaration, Deprecated, Module, Package};
pub use semantic::FlattenedMembers;
