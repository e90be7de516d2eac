//! Project layer: where manifests come from and go to.
//!
//! Reading, globbing and writing go through the [`Workspace`] trait so the
//! rest of the crate never touches the filesystem directly.

mod loader;
mod settings;
mod workspace;

pub use loader::{LoadError, LoadedManifest, ManifestLoader};
pub use settings::Settings;
pub use workspace::{FsWorkspace, Workspace, WorkspaceError};
