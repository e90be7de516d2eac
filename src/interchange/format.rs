//! Common trait for manifest interchange formats.

use super::{DecodeError, Decoded};
use crate::manifest::Package;

/// A serialized representation of a [`Package`].
///
/// Implementations convert between raw bytes and the document model.
/// Reading reports recoverable problems through [`Decoded::warnings`]
/// rather than failing, unless the format was configured as strict.
pub trait ManifestFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Read a package from bytes.
    fn read(&self, input: &[u8]) -> Result<Decoded, DecodeError>;

    /// Write a package to bytes.
    fn write(&self, package: &Package) -> Result<Vec<u8>, DecodeError>;

    /// Validate that the input is well-formed for this format.
    ///
    /// This is a quick check that doesn't fully decode the content.
    fn validate(&self, input: &[u8]) -> Result<(), DecodeError> {
        let _ = input;
        Ok(())
    }
}
