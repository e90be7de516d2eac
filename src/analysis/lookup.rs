//! Name-keyed lookup maps built once per declaration or module.
//!
//! Maps store indices into the owning collection rather than references,
//! so they can live in the host next to the package they describe.

use rustc_hash::FxHashMap;

use crate::manifest::{ClassMember, CustomElementDeclaration, Export, Module};

/// Attribute name to index of the reflecting member in the element's own
/// `members`.
pub(crate) type AttributeFieldMap = FxHashMap<String, usize>;

/// Only the element's own members are considered; inherited fields are
/// reached through the flattened view. The last field naming an attribute
/// wins.
pub(crate) fn build_attribute_map(element: &CustomElementDeclaration) -> AttributeFieldMap {
    let mut map = FxHashMap::default();
    for (i, member) in element.class.members.iter().enumerate() {
        match member {
            ClassMember::CustomElementField(field) if !field.attribute.is_empty() => {
                map.insert(field.attribute.clone(), i);
            }
            _ => {}
        }
    }
    map
}

/// Declaration name to export index, split by export kind.
#[derive(Debug, Default)]
pub(crate) struct ExportMaps {
    pub(crate) custom_elements: FxHashMap<String, usize>,
    pub(crate) javascript: FxHashMap<String, usize>,
}

/// Exports whose declaration points into another module are left out. On
/// duplicate names the last export wins.
pub(crate) fn build_export_maps(module: &Module) -> ExportMaps {
    let mut maps = ExportMaps::default();
    for (i, export) in module.exports.iter().enumerate() {
        let declaration = export.declaration();
        if !declaration.points_into(&module.path) {
            continue;
        }
        let map = match export {
            Export::CustomElement(_) => &mut maps.custom_elements,
            Export::JavaScript(_) => &mut maps.javascript,
        };
        map.insert(declaration.name.clone(), i);
    }
    maps
}
