//! Module-level declarations.
//!
//! The six wire shapes form a closed set. Shared shape lives in three
//! facets flattened into each struct: [`ClassLike`] (superclass, mixins,
//! members), [`FunctionLike`] (parameters, return) and [`CustomElement`]
//! (tag name and HTML-facing facets).

use serde::{Deserialize, Serialize};

use super::deprecated::Deprecated;
use super::facets::{Attribute, CssCustomProperty, CssCustomState, CssPart, Demo, Event, Slot};
use super::member::{ClassMember, FunctionLike};
use super::reference::{Reference, SourceReference, Type};

#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Class(ClassDeclaration),
    CustomElement(CustomElementDeclaration),
    Mixin(MixinDeclaration),
    CustomElementMixin(CustomElementMixinDeclaration),
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
}

/// Inheritance shape shared by classes and mixins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassLike {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ClassMember>,
}

/// HTML-facing facet of custom elements and custom-element mixins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomElement {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css_parts: Vec<CssPart>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css_properties: Vec<CssCustomProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css_states: Vec<CssCustomState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub demos: Vec<Demo>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(flatten)]
    pub class: ClassLike,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

/// A class registered as a DOM tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomElementDeclaration {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(flatten)]
    pub class: ClassLike,
    #[serde(flatten)]
    pub element: CustomElement,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MixinDeclaration {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(flatten)]
    pub class: ClassLike,
    #[serde(flatten)]
    pub signature: FunctionLike,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomElementMixinDeclaration {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(flatten)]
    pub class: ClassLike,
    #[serde(flatten)]
    pub signature: FunctionLike,
    #[serde(flatten)]
    pub element: CustomElement,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(flatten)]
    pub signature: FunctionLike,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    #[serde(skip)]
    pub start_byte: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceReference>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Type>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "Deprecated::is_none")]
    pub deprecated: Deprecated,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl CustomElementDeclaration {
    pub fn new(name: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: CustomElement {
                tag_name: tag_name.into(),
                ..CustomElement::default()
            },
            ..Self::default()
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.element.tag_name
    }

    /// Always true; the variant itself carries the `customElement` marker.
    pub fn is_custom_element(&self) -> bool {
        true
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_deprecated()
    }

    /// Merge `part` into a same-name part, or append it.
    ///
    /// Non-empty summary/description and a present deprecation overwrite
    /// the existing values; the start byte is always taken from `part`.
    pub fn add_or_update_part(&mut self, part: CssPart) {
        let parts = &mut self.element.css_parts;
        match parts.iter_mut().find(|p| p.name == part.name) {
            Some(existing) => {
                update_documented(
                    &mut existing.summary,
                    &mut existing.description,
                    &mut existing.deprecated,
                    (part.summary, part.description, part.deprecated),
                );
                existing.start_byte = part.start_byte;
            }
            None => parts.push(part),
        }
    }

    /// Merge `slot` into a same-name slot, or append it.
    pub fn add_or_update_slot(&mut self, slot: Slot) {
        match self.element.slots.iter_mut().find(|s| s.name == slot.name) {
            Some(existing) => {
                update_documented(
                    &mut existing.summary,
                    &mut existing.description,
                    &mut existing.deprecated,
                    (slot.summary, slot.description, slot.deprecated),
                );
                existing.start_byte = slot.start_byte;
            }
            None => self.element.slots.push(slot),
        }
    }
}

fn update_documented(
    summary: &mut String,
    description: &mut String,
    deprecated: &mut Deprecated,
    incoming: (String, String, Deprecated),
) {
    if !incoming.0.is_empty() {
        *summary = incoming.0;
    }
    if !incoming.1.is_empty() {
        *description = incoming.1;
    }
    if !incoming.2.is_none() {
        *deprecated = incoming.2;
    }
}

impl MixinDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl CustomElementMixinDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_custom_element(&self) -> bool {
        true
    }
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(d) => &d.name,
            Declaration::CustomElement(d) => &d.name,
            Declaration::Mixin(d) => &d.name,
            Declaration::CustomElementMixin(d) => &d.name,
            Declaration::Function(d) => &d.name,
            Declaration::Variable(d) => &d.name,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            Declaration::Class(d) => &d.summary,
            Declaration::CustomElement(d) => &d.summary,
            Declaration::Mixin(d) => &d.summary,
            Declaration::CustomElementMixin(d) => &d.summary,
            Declaration::Function(d) => &d.summary,
            Declaration::Variable(d) => &d.summary,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Declaration::Class(d) => &d.description,
            Declaration::CustomElement(d) => &d.description,
            Declaration::Mixin(d) => &d.description,
            Declaration::CustomElementMixin(d) => &d.description,
            Declaration::Function(d) => &d.description,
            Declaration::Variable(d) => &d.description,
        }
    }

    pub fn deprecated(&self) -> &Deprecated {
        match self {
            Declaration::Class(d) => &d.deprecated,
            Declaration::CustomElement(d) => &d.deprecated,
            Declaration::Mixin(d) => &d.deprecated,
            Declaration::CustomElementMixin(d) => &d.deprecated,
            Declaration::Function(d) => &d.deprecated,
            Declaration::Variable(d) => &d.deprecated,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated().is_deprecated()
    }

    pub fn start_byte(&self) -> u32 {
        match self {
            Declaration::Class(d) => d.start_byte,
            Declaration::CustomElement(d) => d.start_byte,
            Declaration::Mixin(d) => d.start_byte,
            Declaration::CustomElementMixin(d) => d.start_byte,
            Declaration::Function(d) => d.start_byte,
            Declaration::Variable(d) => d.start_byte,
        }
    }

    /// The wire `kind` this declaration encodes as.
    pub fn kind(&self) -> &'static str {
        use crate::base::constants::{KIND_CLASS, KIND_FUNCTION, KIND_MIXIN, KIND_VARIABLE};
        match self {
            Declaration::Class(_) | Declaration::CustomElement(_) => KIND_CLASS,
            Declaration::Mixin(_) | Declaration::CustomElementMixin(_) => KIND_MIXIN,
            Declaration::Function(_) => KIND_FUNCTION,
            Declaration::Variable(_) => KIND_VARIABLE,
        }
    }

    /// Superclass, mixins and members, for classes and mixins.
    pub fn class_like(&self) -> Option<&ClassLike> {
        match self {
            Declaration::Class(d) => Some(&d.class),
            Declaration::CustomElement(d) => Some(&d.class),
            Declaration::Mixin(d) => Some(&d.class),
            Declaration::CustomElementMixin(d) => Some(&d.class),
            Declaration::Function(_) | Declaration::Variable(_) => None,
        }
    }

    pub fn class_like_mut(&mut self) -> Option<&mut ClassLike> {
        match self {
            Declaration::Class(d) => Some(&mut d.class),
            Declaration::CustomElement(d) => Some(&mut d.class),
            Declaration::Mixin(d) => Some(&mut d.class),
            Declaration::CustomElementMixin(d) => Some(&mut d.class),
            Declaration::Function(_) | Declaration::Variable(_) => None,
        }
    }

    /// The HTML-facing facet, for custom elements and custom-element mixins.
    pub fn custom_element(&self) -> Option<&CustomElement> {
        match self {
            Declaration::CustomElement(d) => Some(&d.element),
            Declaration::CustomElementMixin(d) => Some(&d.element),
            _ => None,
        }
    }

    pub fn as_custom_element(&self) -> Option<&CustomElementDeclaration> {
        match self {
            Declaration::CustomElement(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_mixin(&self) -> bool {
        matches!(self, Declaration::Mixin(_) | Declaration::CustomElementMixin(_))
    }
}

impl From<ClassDeclaration> for Declaration {
    fn from(d: ClassDeclaration) -> Self {
        Declaration::Class(d)
    }
}

impl From<CustomElementDeclaration> for Declaration {
    fn from(d: CustomElementDeclaration) -> Self {
        Declaration::CustomElement(d)
    }
}

impl From<MixinDeclaration> for Declaration {
    fn from(d: MixinDeclaration) -> Self {
        Declaration::Mixin(d)
    }
}

impl From<CustomElementMixinDeclaration> for Declaration {
    fn from(d: CustomElementMixinDeclaration) -> Self {
        Declaration::CustomElementMixin(d)
    }
}

impl From<FunctionDeclaration> for Declaration {
    fn from(d: FunctionDeclaration) -> Self {
        Declaration::Function(d)
    }
}

impl From<VariableDeclaration> for Declaration {
    fn from(d: VariableDeclaration) -> Self {
        Declaration::Variable(d)
    }
}
