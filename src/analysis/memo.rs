//! Compute-once cells with panic containment.
//!
//! Every derived view is stored in a pre-allocated [`OnceLock`]. The first
//! caller runs the computation; concurrent callers block on the cell until
//! it completes and then share the result. A panicking computation is
//! caught and the cell is completed with a fallback value, so waiters are
//! always released and the computation never re-runs.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::error;

/// Counters for the memo cells of one [`ManifestHost`](super::ManifestHost).
#[derive(Debug, Default)]
pub struct CacheStats {
    flatten_computations: AtomicUsize,
    attribute_map_builds: AtomicUsize,
    export_map_builds: AtomicUsize,
    contained_panics: AtomicUsize,
}

impl CacheStats {
    /// Flattening computations actually executed.
    pub fn flatten_computations(&self) -> usize {
        self.flatten_computations.load(Ordering::Relaxed)
    }

    /// Attribute-to-field maps built.
    pub fn attribute_map_builds(&self) -> usize {
        self.attribute_map_builds.load(Ordering::Relaxed)
    }

    /// Per-module export maps built.
    pub fn export_map_builds(&self) -> usize {
        self.export_map_builds.load(Ordering::Relaxed)
    }

    /// Computations that panicked and were replaced by their fallback.
    pub fn contained_panics(&self) -> usize {
        self.contained_panics.load(Ordering::Relaxed)
    }

    pub(crate) fn record_flatten(&self) {
        self.flatten_computations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_attribute_map(&self) {
        self.attribute_map_builds.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_export_map(&self) {
        self.export_map_builds.fetch_add(1, Ordering::Relaxed);
    }

    fn record_panic(&self) {
        self.contained_panics.fetch_add(1, Ordering::Relaxed);
    }
}

/// Initialize `cell` with `compute`, at most once.
///
/// If `compute` panics, the cell receives `fallback()` instead and an
/// `error!` event is emitted.
pub(crate) fn compute_once<'a, T>(
    cell: &'a OnceLock<T>,
    what: &'static str,
    stats: &CacheStats,
    compute: impl FnOnce() -> T,
    fallback: impl FnOnce() -> T,
) -> &'a T {
    cell.get_or_init(|| match panic::catch_unwind(AssertUnwindSafe(compute)) {
        Ok(value) => value,
        Err(payload) => {
            stats.record_panic();
            error!(
                computation = what,
                panic = panic_message(payload.as_ref()),
                "computation panicked; caching empty result"
            );
            fallback()
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<non-string panic payload>"
    }
}
