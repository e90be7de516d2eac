//! ManifestHost: one loaded manifest plus every view derived from it.
//!
//! The host owns the [`Package`] and never hands out mutable access to it,
//! so the addresses of its modules and declarations are stable for the
//! host's lifetime. Those addresses are the cache keys: a declaration is
//! "ours" exactly when it lives inside this host's package. Structurally
//! equal declarations from another document never share a cache entry.
//!
//! Caches are never invalidated. To change the document, take it back out
//! with [`ManifestHost::into_package`], edit it, and build a new host.
//!
//! ## Usage
//!
//! ```ignore
//! let host = ManifestHost::new(decoded.package);
//! let context = host.tag("my-button")?;
//! let flattened = host.flattened_members(context.declaration);
//! ```

use std::sync::OnceLock;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::lookup::{AttributeFieldMap, ExportMaps, build_attribute_map, build_export_maps};
use super::memo::{CacheStats, compute_once};
use crate::manifest::{
    CustomElementDeclaration, CustomElementExport, CustomElementField, Declaration,
    JavaScriptExport, Module, Package,
};
use crate::semantic::{FlattenedMembers, flatten};

static EMPTY_FLATTENED: FlattenedMembers = FlattenedMembers::EMPTY;

/// Position of an indexed custom element inside the package.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ElementSlot {
    /// Dense id; index into the per-element cells.
    pub(crate) id: usize,
    pub(crate) module: usize,
    pub(crate) declaration: usize,
}

/// Address-keyed index over the package, built once at construction.
#[derive(Debug, Default)]
struct IdentityIndex {
    elements: FxHashMap<usize, ElementSlot>,
    modules: FxHashMap<usize, usize>,
    slots: Vec<ElementSlot>,
    /// First declaration wins when a tag name repeats.
    tags: FxHashMap<String, usize>,
}

fn address<T>(value: &T) -> usize {
    std::ptr::from_ref(value).addr()
}

impl IdentityIndex {
    fn build(package: &Package) -> Self {
        let mut index = Self::default();
        for (module_id, module) in package.modules.iter().enumerate() {
            index.modules.insert(address(module), module_id);
            for (decl_id, declaration) in module.declarations.iter().enumerate() {
                let Declaration::CustomElement(element) = declaration else {
                    continue;
                };
                let slot = ElementSlot {
                    id: index.slots.len(),
                    module: module_id,
                    declaration: decl_id,
                };
                index.elements.insert(address(element), slot);
                index.slots.push(slot);
                if !element.tag_name().is_empty() {
                    index
                        .tags
                        .entry(element.tag_name().to_string())
                        .or_insert(slot.id);
                }
            }
        }
        index
    }
}

/// Owns a package and its memoized derived views.
pub struct ManifestHost {
    package: Package,
    index: IdentityIndex,
    flattened: Box<[OnceLock<FlattenedMembers>]>,
    attribute_fields: Box<[OnceLock<AttributeFieldMap>]>,
    exports: Box<[OnceLock<ExportMaps>]>,
    stats: CacheStats,
}

fn cells<T>(len: usize) -> Box<[OnceLock<T>]> {
    (0..len).map(|_| OnceLock::new()).collect()
}

impl ManifestHost {
    pub fn new(package: Package) -> Self {
        let index = IdentityIndex::build(&package);
        let elements = index.slots.len();
        debug!(
            modules = package.modules.len(),
            custom_elements = elements,
            "indexed manifest"
        );
        Self {
            flattened: cells(elements),
            attribute_fields: cells(elements),
            exports: cells(package.modules.len()),
            stats: CacheStats::default(),
            index,
            package,
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Give the package back, dropping every cache.
    pub fn into_package(self) -> Package {
        self.package
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub(crate) fn slot_of(&self, element: &CustomElementDeclaration) -> Option<ElementSlot> {
        let slot = self.index.elements.get(&address(element)).copied();
        if slot.is_none() {
            debug!(element = %element.name, "declaration does not belong to this manifest");
        }
        slot
    }

    pub(crate) fn slot_for_tag(&self, tag_name: &str) -> Option<ElementSlot> {
        let id = *self.index.tags.get(tag_name)?;
        self.index.slots.get(id).copied()
    }

    pub(crate) fn slots(&self) -> &[ElementSlot] {
        &self.index.slots
    }

    /// The module and declaration a slot points at.
    pub(crate) fn resolve_slot(
        &self,
        slot: ElementSlot,
    ) -> Option<(&Module, &CustomElementDeclaration)> {
        let module = self.package.modules.get(slot.module)?;
        let element = module
            .declarations
            .get(slot.declaration)?
            .as_custom_element()?;
        Some((module, element))
    }

    /// Flattened members and facets of `element`, computed at most once.
    ///
    /// A declaration from another document yields an empty view.
    pub fn flattened_members(&self, element: &CustomElementDeclaration) -> &FlattenedMembers {
        let Some(slot) = self.slot_of(element) else {
            return &EMPTY_FLATTENED;
        };
        let Some((module, element)) = self.resolve_slot(slot) else {
            return &EMPTY_FLATTENED;
        };
        compute_once(
            &self.flattened[slot.id],
            "flatten",
            &self.stats,
            || {
                self.stats.record_flatten();
                flatten(&self.package, module, element)
            },
            FlattenedMembers::degraded,
        )
    }

    /// The own `CustomElementField` reflecting `attribute`, if any.
    pub fn attribute_field_for(
        &self,
        element: &CustomElementDeclaration,
        attribute: &str,
    ) -> Option<&CustomElementField> {
        let slot = self.slot_of(element)?;
        let (_, element) = self.resolve_slot(slot)?;
        let map = compute_once(
            &self.attribute_fields[slot.id],
            "attribute map",
            &self.stats,
            || {
                self.stats.record_attribute_map();
                build_attribute_map(element)
            },
            FxHashMap::default,
        );
        let index = *map.get(attribute)?;
        element.class.members.get(index)?.as_custom_element_field()
    }

    /// The custom-element and JavaScript exports of `module` for the
    /// declaration named `declaration`.
    pub fn export_for(
        &self,
        module: &Module,
        declaration: &str,
    ) -> (Option<&CustomElementExport>, Option<&JavaScriptExport>) {
        let Some(&module_id) = self.index.modules.get(&address(module)) else {
            debug!(module = %module.path, "module does not belong to this manifest");
            return (None, None);
        };
        let Some(module) = self.package.modules.get(module_id) else {
            return (None, None);
        };
        let maps = compute_once(
            &self.exports[module_id],
            "export maps",
            &self.stats,
            || {
                self.stats.record_export_map();
                build_export_maps(module)
            },
            ExportMaps::default,
        );

        let custom_element = maps
            .custom_elements
            .get(declaration)
            .and_then(|&i| match module.exports.get(i)? {
                crate::manifest::Export::CustomElement(export) => Some(export),
                _ => None,
            });
        let javascript = maps
            .javascript
            .get(declaration)
            .and_then(|&i| match module.exports.get(i)? {
                crate::manifest::Export::JavaScript(export) => Some(export),
                _ => None,
            });
        (custom_element, javascript)
    }

    /// Flatten every custom element in parallel.
    pub fn flatten_all(&self) -> Vec<(&CustomElementDeclaration, &FlattenedMembers)> {
        self.index
            .slots
            .par_iter()
            .filter_map(|&slot| {
                let (_, element) = self.resolve_slot(slot)?;
                Some((element, self.flattened_members(element)))
            })
            .collect()
    }
}

/// Clones the document; the clone starts with empty caches.
impl Clone for ManifestHost {
    fn clone(&self) -> Self {
        Self::new(self.package.clone())
    }
}

impl std::fmt::Debug for ManifestHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestHost")
            .field("modules", &self.package.modules.len())
            .field("custom_elements", &self.index.slots.len())
            .field("stats", &self.stats)
            .finish()
    }
}
