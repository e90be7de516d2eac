//! Error types for manifest decoding and encoding.

use std::fmt;

use thiserror::Error;

/// Where in the document an element sits; used to label decode errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Package,
    Module,
    Declaration,
    Member,
    Export,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Package => "package",
            Position::Module => "module",
            Position::Declaration => "declaration",
            Position::Member => "member",
            Position::Export => "export",
        })
    }
}

/// Errors that can occur while decoding or encoding a manifest.
///
/// The first three variants are always fatal. The rest are recoverable:
/// under the default policy the offending element is skipped and the error
/// is collected into [`DecodeErrors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Malformed JSON, or a serialization failure.
    #[error("JSON error: {0}")]
    Json(String),

    #[error("invalid manifest root: expected a JSON object, found {found}")]
    InvalidRoot { found: &'static str },

    #[error("{path}: invalid type for deprecated field (found {found})")]
    InvalidDeprecated { path: String, found: &'static str },

    #[error("{path}: unknown {position} kind {kind:?}")]
    UnknownKind {
        position: Position,
        kind: String,
        path: String,
    },

    #[error("{path}: missing {position} kind")]
    MissingKind { position: Position, path: String },

    #[error("{path}: expected a JSON object for {position}, found {found}")]
    NotAnObject {
        position: Position,
        path: String,
        found: &'static str,
    },

    /// The element's fields failed to decode (wrong types, missing name, ...).
    #[error("{path}: invalid {position}: {message}")]
    Invalid {
        position: Position,
        path: String,
        message: String,
    },
}

impl DecodeError {
    /// Create a JSON error.
    pub fn json(message: impl fmt::Display) -> Self {
        Self::Json(message.to_string())
    }

    /// Create a structural error for the element at `path`.
    pub fn invalid(position: Position, path: &str, message: impl fmt::Display) -> Self {
        Self::Invalid {
            position,
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the skip-and-aggregate policy may skip past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownKind { .. }
                | Self::MissingKind { .. }
                | Self::NotAnObject { .. }
                | Self::Invalid { .. }
        )
    }

    /// JSON path of the offending element, when known.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Json(_) | Self::InvalidRoot { .. } => None,
            Self::InvalidDeprecated { path, .. }
            | Self::UnknownKind { path, .. }
            | Self::MissingKind { path, .. }
            | Self::NotAnObject { path, .. }
            | Self::Invalid { path, .. } => Some(path),
        }
    }
}

/// Every recoverable error collected during one decode, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeErrors(Vec<DecodeError>);

impl DecodeErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: DecodeError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecodeError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<DecodeError> {
        self.0
    }
}

impl fmt::Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeErrors {}

impl From<Vec<DecodeError>> for DecodeErrors {
    fn from(errors: Vec<DecodeError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for DecodeErrors {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = std::slice::Iter<'a, DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
