//! Tag-name queries over a [`ManifestHost`].
//!
//! These are the entry points renderers use: look up an element by tag,
//! then read its flattened facets. An unknown tag is an error, distinct
//! from a known tag with no items.

use thiserror::Error;

use super::host::{ElementSlot, ManifestHost};
use crate::manifest::{
    Attribute, ClassMethod, CssCustomProperty, CssCustomState, CssPart, CustomElementDeclaration,
    CustomElementExport, CustomElementField, Event, JavaScriptExport, Module, Slot,
};
use crate::semantic::FlattenedMembers;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("tag not found: {0}")]
    TagNotFound(String),
}

/// A custom element together with its module and exports.
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    pub tag_name: &'a str,
    pub module: &'a Module,
    pub declaration: &'a CustomElementDeclaration,
    pub custom_element_export: Option<&'a CustomElementExport>,
    pub javascript_export: Option<&'a JavaScriptExport>,
}

/// An attribute with the field that reflects it, when one exists.
#[derive(Debug, Clone, Copy)]
pub struct AttributeEntry<'a> {
    pub attribute: &'a Attribute,
    pub field: Option<&'a CustomElementField>,
}

impl ManifestHost {
    fn context(&self, slot: ElementSlot) -> Option<TagContext<'_>> {
        let (module, declaration) = self.resolve_slot(slot)?;
        let (custom_element_export, javascript_export) = self.export_for(module, &declaration.name);
        Some(TagContext {
            tag_name: declaration.tag_name(),
            module,
            declaration,
            custom_element_export,
            javascript_export,
        })
    }

    /// The element registered as `tag_name`. With duplicates, the first
    /// in document order wins.
    pub fn tag(&self, tag_name: &str) -> Result<TagContext<'_>, QueryError> {
        self.slot_for_tag(tag_name)
            .and_then(|slot| self.context(slot))
            .ok_or_else(|| QueryError::TagNotFound(tag_name.to_string()))
    }

    /// Every tagged custom element, modules in document order and
    /// elements within a module by source position.
    pub fn custom_elements(&self) -> Vec<TagContext<'_>> {
        let mut contexts: Vec<_> = self
            .slots()
            .iter()
            .filter_map(|&slot| Some((slot.module, self.context(slot)?)))
            .filter(|(_, context)| !context.tag_name.is_empty())
            .collect();
        contexts.sort_by_key(|(module, context)| (*module, context.declaration.start_byte));
        contexts.into_iter().map(|(_, context)| context).collect()
    }

    fn flattened_for_tag(&self, tag_name: &str) -> Result<&FlattenedMembers, QueryError> {
        let context = self.tag(tag_name)?;
        Ok(self.flattened_members(context.declaration))
    }

    /// Flattened attributes, each paired with its reflecting field: the
    /// element's own field first, then an inherited one.
    pub fn tag_attributes(&self, tag_name: &str) -> Result<Vec<AttributeEntry<'_>>, QueryError> {
        let context = self.tag(tag_name)?;
        let flattened = self.flattened_members(context.declaration);
        Ok(flattened
            .attributes
            .iter()
            .map(|attribute| AttributeEntry {
                attribute,
                field: self
                    .attribute_field_for(context.declaration, &attribute.name)
                    .or_else(|| inherited_field(flattened, attribute)),
            })
            .collect())
    }

    pub fn tag_slots(&self, tag_name: &str) -> Result<&[Slot], QueryError> {
        Ok(&self.flattened_for_tag(tag_name)?.slots)
    }

    pub fn tag_events(&self, tag_name: &str) -> Result<&[Event], QueryError> {
        Ok(&self.flattened_for_tag(tag_name)?.events)
    }

    pub fn tag_css_parts(&self, tag_name: &str) -> Result<&[CssPart], QueryError> {
        Ok(&self.flattened_for_tag(tag_name)?.css_parts)
    }

    pub fn tag_css_properties(&self, tag_name: &str) -> Result<&[CssCustomProperty], QueryError> {
        Ok(&self.flattened_for_tag(tag_name)?.css_properties)
    }

    pub fn tag_css_states(&self, tag_name: &str) -> Result<&[CssCustomState], QueryError> {
        Ok(&self.flattened_for_tag(tag_name)?.css_states)
    }

    pub fn tag_methods(&self, tag_name: &str) -> Result<&[ClassMethod], QueryError> {
        Ok(&self.flattened_for_tag(tag_name)?.methods)
    }
}

/// A flattened field reflecting `attribute`, matched by attribute name or
/// by the attribute's declared `fieldName`.
fn inherited_field<'a>(
    flattened: &'a FlattenedMembers,
    attribute: &Attribute,
) -> Option<&'a CustomElementField> {
    let mut fields = flattened
        .fields
        .iter()
        .filter_map(|m| m.as_custom_element_field());
    fields.find(|f| {
        f.attribute == attribute.name
            || (!attribute.field_name.is_empty() && f.field.name == attribute.field_name)
    })
}
