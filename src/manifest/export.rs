//! Module exports.

use serde::{Deserialize, Serialize};

use super::deprecated::Deprecated;
use super::reference::Reference;

#[derive(Clone, Debug, PartialEq)]
pub enum Export {
    /// `kind: "js"`: a JavaScript binding.
    JavaScript(JavaScriptExport),
    /// `kind: "custom-element-definition"`: a `customElements.define` call.
    CustomElement(CustomElementExport),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JavaScriptExport {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    pub declaration: Reference,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// `name` is the tag name being defined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomElementExport {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    pub declaration: Reference,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl JavaScriptExport {
    pub fn new(name: impl Into<String>, declaration: Reference) -> Self {
        Self {
            start_byte: 0,
            name: name.into(),
            declaration,
            deprecated: Deprecated::None,
        }
    }
}

impl CustomElementExport {
    pub fn new(tag_name: impl Into<String>, declaration: Reference) -> Self {
        Self {
            start_byte: 0,
            name: tag_name.into(),
            declaration,
            deprecated: Deprecated::None,
        }
    }
}

impl Export {
    pub fn name(&self) -> &str {
        match self {
            Export::JavaScript(e) => &e.name,
            Export::CustomElement(e) => &e.name,
        }
    }

    pub fn declaration(&self) -> &Reference {
        match self {
            Export::JavaScript(e) => &e.declaration,
            Export::CustomElement(e) => &e.declaration,
        }
    }

    pub fn deprecated(&self) -> &Deprecated {
        match self {
            Export::JavaScript(e) => &e.deprecated,
            Export::CustomElement(e) => &e.deprecated,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated().is_deprecated()
    }

    pub fn start_byte(&self) -> u32 {
        match self {
            Export::JavaScript(e) => e.start_byte,
            Export::CustomElement(e) => e.start_byte,
        }
    }

    pub fn kind(&self) -> &'static str {
        use crate::base::constants::{KIND_CUSTOM_ELEMENT_DEFINITION, KIND_JS_EXPORT};
        match self {
            Export::JavaScript(_) => KIND_JS_EXPORT,
            Export::CustomElement(_) => KIND_CUSTOM_ELEMENT_DEFINITION,
        }
    }
}

impl From<JavaScriptExport> for Export {
    fn from(e: JavaScriptExport) -> Self {
        Export::JavaScript(e)
    }
}

impl From<CustomElementExport> for Export {
    fn from(e: CustomElementExport) -> Self {
        Export::CustomElement(e)
    }
}
