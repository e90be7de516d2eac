//! Manifest interchange: the Variant Decoder and its encoder.
//!
//! Manifests arrive as JSON whose polymorphic positions (declarations,
//! class members, exports) carry a `kind` discriminator. Decoding
//! dispatches on it and builds the [`crate::manifest`] model.
//!
//! ## Error policy
//!
//! | Problem                                     | Default       | `strict` |
//! |---------------------------------------------|---------------|----------|
//! | malformed JSON, non-object root             | fatal         | fatal    |
//! | `deprecated` of an unsupported JSON type    | fatal         | fatal    |
//! | unknown or missing `kind`                   | skip, collect | fatal    |
//! | element not an object / fields don't decode | skip, collect | fatal    |
//!
//! ## Usage
//!
//! ```
//! let decoded = cem::interchange::decode(br#"{"schemaVersion":"1.0.0","modules":[]}"#)?;
//! assert!(decoded.warnings.is_empty());
//! let bytes = cem::interchange::encode(&decoded.package)?;
//! # Ok::<(), cem::interchange::DecodeError>(())
//! ```

mod error;
mod format;
mod json;

pub use error::{DecodeError, DecodeErrors, Position};
pub use format::ManifestFormat;
pub use json::ManifestJson;

use crate::manifest::Package;

/// Decoding policy switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on the first recoverable error instead of skipping the element.
    pub strict: bool,
}

/// A decoded package together with the elements that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub package: Package,
    pub warnings: DecodeErrors,
}

/// Decode manifest bytes with the default skip-and-collect policy.
pub fn decode(input: &[u8]) -> Result<Decoded, DecodeError> {
    decode_with(input, DecodeOptions::default())
}

pub fn decode_with(input: &[u8], options: DecodeOptions) -> Result<Decoded, DecodeError> {
    ManifestJson::new(options).read(input)
}

/// Encode compactly. Empty collections and absent optionals are omitted.
pub fn encode(package: &Package) -> Result<Vec<u8>, DecodeError> {
    ManifestJson::default().write(package)
}

pub fn encode_pretty(package: &Package) -> Result<Vec<u8>, DecodeError> {
    ManifestJson::default().pretty().write(package)
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ManifestFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(ManifestJson::default())),
        _ => None,
    }
}
