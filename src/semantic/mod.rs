//! Semantic layer: reference resolution and inheritance flattening.
//!
//! Everything here is a pure function of a borrowed [`Package`]; caching
//! lives one layer up in [`crate::analysis`].
//!
//! [`Package`]: crate::manifest::Package

mod flatten;
mod merge;
mod resolve;

pub use flatten::{FlattenedMembers, flatten};
pub use merge::{Inheritable, merge};
pub use resolve::{Resolved, VisitKey, find_declaration, mixin_chain, superclass_chain};
