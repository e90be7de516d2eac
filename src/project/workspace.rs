//! The filesystem boundary.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("failed to walk workspace: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Where manifests are read from and written to.
pub trait Workspace: Send + Sync {
    /// Read a whole file. Relative paths resolve against the workspace.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Files matching `pattern`, relative to the workspace, sorted.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, WorkspaceError>;

    /// Open `path` for writing, creating parent directories.
    fn write_output(&self, path: &Path) -> io::Result<Box<dyn Write>>;
}

/// A workspace rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Workspace for FsWorkspace {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, WorkspaceError> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()?
            .compile_matcher();

        let mut matches = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if matcher.is_match(relative) {
                matches.push(relative.to_path_buf());
            }
        }
        matches.sort();
        Ok(matches)
    }

    fn write_output(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        let path = self.resolve(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Box::new(BufWriter::new(fs::File::create(path)?)))
    }
}
