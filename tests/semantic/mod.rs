//! Semantic layer tests
//!
//! Reference resolution and inheritance flattening over whole documents.

pub mod tests_flatten;
pub mod tests_resolve;
