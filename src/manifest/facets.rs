//! HTML-facing facets of a custom element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::deprecated::Deprecated;
use super::reference::{Reference, SourceReference, Type};

/// An HTML attribute exposed by a custom element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    /// Name of the reflecting class field, when the manifest links one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field_name: String,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A value rejected by [`Attribute::validation_error`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for attribute {attribute:?}. Valid values: {allowed:?}")]
pub struct AttributeValueError {
    pub attribute: String,
    pub value: String,
    pub allowed: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }

    fn type_text(&self) -> &str {
        self.r#type.as_ref().map_or("", |t| t.text.as_str())
    }

    /// Whether the declared type is a union of literals, e.g. `'a' | 'b'`.
    pub fn is_enum(&self) -> bool {
        self.type_text().contains('|')
    }

    /// Members of the union type, trimmed, with empty parts dropped.
    pub fn enum_values(&self) -> Vec<String> {
        if !self.is_enum() {
            return Vec::new();
        }
        self.type_text()
            .split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Non-enum attributes accept anything. Enum attributes accept a union
    /// member either verbatim or with its double quotes removed.
    pub fn is_valid_value(&self, value: &str) -> bool {
        if !self.is_enum() {
            return true;
        }
        self.enum_values().iter().any(|allowed| {
            let unquoted = allowed
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(allowed);
            value == allowed || value == unquoted
        })
    }

    pub fn validation_error(&self, value: &str) -> Option<AttributeValueError> {
        if self.is_valid_value(value) {
            return None;
        }
        Some(AttributeValueError {
            attribute: self.name.clone(),
            value: value.to_string(),
            allowed: self.enum_values(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(skip)]
    pub start_byte: u32,
    /// Empty for the default slot.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl Slot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }
}

/// A `::part()` exposed by the element's shadow root.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssPart {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl CssPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }
}

/// A CSS custom property (`--name`) the element reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssCustomProperty {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    /// `@property` syntax string, e.g. `<color>`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub syntax: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl CssCustomProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }
}

/// A custom state usable with `:state()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssCustomState {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<Reference>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl CssCustomState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
}
