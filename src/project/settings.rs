use std::path::PathBuf;

use serde::Deserialize;

use crate::base::constants::DEFAULT_MANIFEST_FILE;
use crate::interchange::DecodeOptions;

/// Loader configuration, as parsed from the host tool's config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Manifest location, relative to the workspace.
    pub manifest_path: PathBuf,
    /// Fail on the first skipped element.
    pub strict: bool,
    /// Decode leniently, but fail the load if anything was skipped.
    pub warnings_as_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_FILE),
            strict: false,
            warnings_as_errors: false,
        }
    }
}

impl Settings {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict: self.strict,
        }
    }
}
