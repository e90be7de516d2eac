//! Foundation types for the cem toolchain.
//!
//! This module provides the primitives shared by every layer above it:
//! - [`constants`] - `kind` discriminators and schema defaults
//! - [`normalize_module_path`] - canonical module paths (`.ts` → `.js`, ...)
//!
//! This module has NO dependencies on other cem modules.

pub mod constants;
mod path;

pub use path::normalize_module_path;
