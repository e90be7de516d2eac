//! Loading manifests from a workspace into a [`ManifestHost`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::settings::Settings;
use super::workspace::{Workspace, WorkspaceError};
use crate::analysis::ManifestHost;
use crate::interchange::{self, DecodeError, DecodeErrors};
use crate::manifest::Package;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: DecodeError },

    #[error("{} skipped element(s) in {}:\n{warnings}", .warnings.len(), .path.display())]
    Warnings {
        path: PathBuf,
        warnings: DecodeErrors,
    },

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// A manifest ready for queries, with whatever the decoder skipped.
#[derive(Debug)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub host: ManifestHost,
    pub warnings: DecodeErrors,
}

/// Reads and writes manifests according to [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    settings: Settings,
}

impl ManifestLoader {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load the manifest at the configured path.
    pub fn load(&self, workspace: &dyn Workspace) -> Result<LoadedManifest, LoadError> {
        self.load_path(workspace, &self.settings.manifest_path)
    }

    pub fn load_path(
        &self,
        workspace: &dyn Workspace,
        path: &Path,
    ) -> Result<LoadedManifest, LoadError> {
        let bytes = workspace.read_file(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = interchange::decode_with(&bytes, self.settings.decode_options())
            .map_err(|source| LoadError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            "loaded manifest with {} warnings",
            decoded.warnings.len()
        );
        if self.settings.warnings_as_errors && !decoded.warnings.is_empty() {
            return Err(LoadError::Warnings {
                path: path.to_path_buf(),
                warnings: decoded.warnings,
            });
        }

        Ok(LoadedManifest {
            path: path.to_path_buf(),
            host: ManifestHost::new(decoded.package),
            warnings: decoded.warnings,
        })
    }

    /// Load every manifest matching `pattern`.
    ///
    /// A manifest that fails to load is logged and left out; the error is
    /// returned alongside the successes.
    pub fn load_all(
        &self,
        workspace: &dyn Workspace,
        pattern: &str,
    ) -> Result<(Vec<LoadedManifest>, Vec<LoadError>), LoadError> {
        let mut loaded = Vec::new();
        let mut failed = Vec::new();
        for path in workspace.glob(pattern)? {
            match self.load_path(workspace, &path) {
                Ok(manifest) => loaded.push(manifest),
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to load manifest");
                    failed.push(error);
                }
            }
        }
        Ok((loaded, failed))
    }

    /// Encode `package` (indented) and write it to `path`.
    pub fn write(
        &self,
        workspace: &dyn Workspace,
        path: &Path,
        package: &Package,
    ) -> Result<(), LoadError> {
        let bytes = interchange::encode_pretty(package).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let write_error = |source| LoadError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut out = workspace.write_output(path).map_err(write_error)?;
        out.write_all(&bytes).map_err(write_error)?;
        out.flush().map_err(write_error)
    }
}
