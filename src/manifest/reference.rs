//! Cross-references and the small value types shared by every entity.

use serde::{Deserialize, Serialize};

use crate::base::normalize_module_path;

/// A pointer to a declaration by name, optionally qualified by module path
/// and package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl Reference {
    /// A reference by bare name; resolves against every module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            module: None,
        }
    }

    /// Qualify the reference with a module path.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Qualify the reference with a package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// The module qualifier, or `""` when absent.
    pub fn module_path(&self) -> &str {
        self.module.as_deref().unwrap_or_default()
    }

    /// Whether this reference can point into the module at `path`.
    ///
    /// An unqualified reference matches every module. Qualified paths are
    /// compared after normalization, so `./src/a.ts` matches `src/a.js`.
    pub fn points_into(&self, path: &str) -> bool {
        let module = self.module_path();
        module.is_empty()
            || module == path
            || normalize_module_path(module) == normalize_module_path(path)
    }
}

/// Link to the source of an entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceReference {
    pub href: String,
}

/// A reference from inside a type string, with its character range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
}

/// A TypeScript type as written in source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<TypeReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
}

impl Type {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
