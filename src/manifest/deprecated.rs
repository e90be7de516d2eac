//! The polymorphic `deprecated` marker.
//!
//! Manifests write deprecation either as a boolean flag or as a free-text
//! reason. The decoded value remembers which shape it came from so that
//! re-encoding reproduces the same JSON.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message reported for a `deprecated` value that is neither bool nor string.
pub const INVALID_DEPRECATED: &str = "invalid type for deprecated field";

/// Deprecation marker: absent, a boolean flag, or a reason string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Deprecated {
    /// No `deprecated` key (or `null`).
    #[default]
    None,
    /// `"deprecated": true` / `"deprecated": false`.
    Flag(bool),
    /// `"deprecated": "use x instead"`.
    Reason(String),
}

impl Deprecated {
    /// True when the marker is absent.
    ///
    /// Used as the `skip_serializing_if` predicate on every entity.
    pub fn is_none(&self) -> bool {
        matches!(self, Deprecated::None)
    }

    /// Whether the marker actually deprecates its entity.
    ///
    /// `Flag(false)` is an explicit "not deprecated"; any reason, even an
    /// empty one, deprecates.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Deprecated::None | Deprecated::Flag(false) => false,
            Deprecated::Flag(true) | Deprecated::Reason(_) => true,
        }
    }

    /// The free-text reason, if one was given.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecated::Reason(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<bool> for Deprecated {
    fn from(flag: bool) -> Self {
        Deprecated::Flag(flag)
    }
}

impl From<&str> for Deprecated {
    fn from(reason: &str) -> Self {
        Deprecated::Reason(reason.to_string())
    }
}

impl From<String> for Deprecated {
    fn from(reason: String) -> Self {
        Deprecated::Reason(reason)
    }
}

impl fmt::Display for Deprecated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deprecated::None | Deprecated::Flag(false) => Ok(()),
            Deprecated::Flag(true) => write!(f, "deprecated"),
            Deprecated::Reason(reason) if reason.is_empty() => write!(f, "deprecated"),
            Deprecated::Reason(reason) => write!(f, "deprecated: {reason}"),
        }
    }
}

impl Serialize for Deprecated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Deprecated::None => serializer.serialize_none(),
            Deprecated::Flag(flag) => serializer.serialize_bool(*flag),
            Deprecated::Reason(reason) => serializer.serialize_str(reason),
        }
    }
}

impl<'de> Deserialize<'de> for Deprecated {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DeprecatedVisitor)
    }
}

struct DeprecatedVisitor;

impl<'de> Visitor<'de> for DeprecatedVisitor {
    type Value = Deprecated;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a boolean, a string or null")
    }

    fn visit_bool<E: de::Error>(self, flag: bool) -> Result<Deprecated, E> {
        Ok(Deprecated::Flag(flag))
    }

    fn visit_str<E: de::Error>(self, reason: &str) -> Result<Deprecated, E> {
        Ok(Deprecated::Reason(reason.to_string()))
    }

    fn visit_string<E: de::Error>(self, reason: String) -> Result<Deprecated, E> {
        Ok(Deprecated::Reason(reason))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Deprecated, E> {
        Ok(Deprecated::None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Deprecated, E> {
        Ok(Deprecated::None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Deprecated, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Deprecated, E> {
        Err(E::custom(INVALID_DEPRECATED))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Deprecated, E> {
        Err(E::custom(INVALID_DEPRECATED))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Deprecated, E> {
        Err(E::custom(INVALID_DEPRECATED))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _: A) -> Result<Deprecated, A::Error> {
        Err(de::Error::custom(INVALID_DEPRECATED))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, _: A) -> Result<Deprecated, A::Error> {
        Err(de::Error::custom(INVALID_DEPRECATED))
    }
}
