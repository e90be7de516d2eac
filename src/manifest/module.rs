use serde::{Deserialize, Serialize};

use super::declaration::{CustomElementDeclaration, Declaration};
use super::deprecated::Deprecated;
use super::export::Export;
use crate::base::constants::KIND_JAVASCRIPT_MODULE;
use crate::base::normalize_module_path;

/// The only module kind the schema defines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    #[default]
    #[serde(rename = "javascript-module")]
    JavaScriptModule,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::JavaScriptModule => KIND_JAVASCRIPT_MODULE,
        }
    }
}

/// One JavaScript module of the package.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub kind: ModuleKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declarations: Vec<Declaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exports: Vec<Export>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl Module {
    /// An empty module at `path`, with TypeScript extensions rewritten to
    /// their JavaScript output.
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_module_path(path),
            ..Self::default()
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }

    /// Look up a declaration of this module by name.
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    pub fn custom_elements(&self) -> impl Iterator<Item = &CustomElementDeclaration> {
        self.declarations
            .iter()
            .filter_map(Declaration::as_custom_element)
    }
}
