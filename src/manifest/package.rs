use serde::{Deserialize, Serialize};

use super::declaration::Declaration;
use super::deprecated::Deprecated;
use super::module::Module;
use crate::base::constants::DEFAULT_SCHEMA_VERSION;

/// Root of a Custom Elements Manifest document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(default)]
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    /// Always written, even when empty; the schema requires the key.
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl Package {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            readme: None,
            modules,
            deprecated: Deprecated::None,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }

    /// Every declaration paired with its owning module, in document order.
    pub fn declarations(&self) -> impl Iterator<Item = (&Module, &Declaration)> {
        self.modules
            .iter()
            .flat_map(|module| module.declarations.iter().map(move |decl| (module, decl)))
    }

    /// Tag names of every custom element that declares one.
    pub fn all_tag_names(&self) -> Vec<&str> {
        self.modules
            .iter()
            .flat_map(Module::custom_elements)
            .map(|element| element.tag_name())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}
