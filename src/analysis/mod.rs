//! Lookup and memoization layer.
//!
//! [`ManifestHost`] owns a decoded [`Package`](crate::manifest::Package)
//! and answers queries against it, computing each derived view (flattened
//! members, attribute-to-field maps, export maps) at most once and caching
//! it for the host's lifetime.

mod host;
mod lookup;
mod memo;
mod queries;

pub use host::ManifestHost;
pub use memo::CacheStats;
pub use queries::{AttributeEntry, QueryError, TagContext};
