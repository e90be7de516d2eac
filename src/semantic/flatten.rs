//! Inheritance flattening: the effective members and facets of a custom
//! element.
//!
//! Contributions are merged lowest priority first: the superclass chain
//! (base to derived), then mixins in resolution order, then the element's
//! own collections. Facet collections come out sorted by name; fields and
//! methods keep application order.

use std::mem;

use tracing::debug;

use super::merge::merge;
use super::resolve::{Resolved, VisitKey, mixin_chain, superclass_chain};
use crate::manifest::{
    Attribute, ClassLike, ClassMember, ClassMethod, CssCustomProperty, CssCustomState, CssPart,
    CustomElement, CustomElementDeclaration, Event, Module, Package, Reference, Slot,
};

/// The flattened view of one custom element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlattenedMembers {
    pub attributes: Vec<Attribute>,
    pub slots: Vec<Slot>,
    pub events: Vec<Event>,
    pub css_parts: Vec<CssPart>,
    pub css_properties: Vec<CssCustomProperty>,
    pub css_states: Vec<CssCustomState>,
    /// `Field` and `CustomElementField` members.
    pub fields: Vec<ClassMember>,
    pub methods: Vec<ClassMethod>,
    degraded: bool,
}

impl FlattenedMembers {
    pub const EMPTY: Self = Self {
        attributes: Vec::new(),
        slots: Vec::new(),
        events: Vec::new(),
        css_parts: Vec::new(),
        css_properties: Vec::new(),
        css_states: Vec::new(),
        fields: Vec::new(),
        methods: Vec::new(),
        degraded: false,
    };

    /// Stand-in for a flattening that failed; carries no data.
    pub(crate) fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::default()
        }
    }

    /// True when the computation failed and this is an empty stand-in.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
            && self.slots.is_empty()
            && self.events.is_empty()
            && self.css_parts.is_empty()
            && self.css_properties.is_empty()
            && self.css_states.is_empty()
            && self.fields.is_empty()
            && self.methods.is_empty()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&ClassMember> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn method(&self, name: &str) -> Option<&ClassMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[derive(Default)]
struct Accumulator {
    attributes: Vec<Attribute>,
    slots: Vec<Slot>,
    events: Vec<Event>,
    css_parts: Vec<CssPart>,
    css_properties: Vec<CssCustomProperty>,
    css_states: Vec<CssCustomState>,
    members: Vec<ClassMember>,
}

impl Accumulator {
    fn absorb(
        &mut self,
        element: Option<&CustomElement>,
        class: Option<&ClassLike>,
        source: Option<&Reference>,
    ) {
        if let Some(element) = element {
            self.attributes = merge(mem::take(&mut self.attributes), &element.attributes, source);
            self.slots = merge(mem::take(&mut self.slots), &element.slots, source);
            self.events = merge(mem::take(&mut self.events), &element.events, source);
            self.css_parts = merge(mem::take(&mut self.css_parts), &element.css_parts, source);
            self.css_properties = merge(
                mem::take(&mut self.css_properties),
                &element.css_properties,
                source,
            );
            self.css_states = merge(mem::take(&mut self.css_states), &element.css_states, source);
        }
        if let Some(class) = class {
            self.members = merge(mem::take(&mut self.members), &class.members, source);
        }
    }

    fn absorb_inherited(&mut self, resolved: &Resolved<'_>) {
        let source = resolved.reference();
        self.absorb(
            resolved.declaration.custom_element(),
            resolved.declaration.class_like(),
            Some(&source),
        );
    }

    fn finish(mut self) -> FlattenedMembers {
        self.attributes.sort_by(|a, b| a.name.cmp(&b.name));
        self.slots.sort_by(|a, b| a.name.cmp(&b.name));
        self.events.sort_by(|a, b| a.name.cmp(&b.name));
        self.css_parts.sort_by(|a, b| a.name.cmp(&b.name));
        self.css_properties.sort_by(|a, b| a.name.cmp(&b.name));
        self.css_states.sort_by(|a, b| a.name.cmp(&b.name));

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        for member in self.members {
            match member {
                ClassMember::Method(method) => methods.push(method),
                field => fields.push(field),
            }
        }

        FlattenedMembers {
            attributes: self.attributes,
            slots: self.slots,
            events: self.events,
            css_parts: self.css_parts,
            css_properties: self.css_properties,
            css_states: self.css_states,
            fields,
            methods,
            degraded: false,
        }
    }
}

/// Compute the flattened view of `element`, declared in `module` of
/// `package`.
///
/// Unresolvable superclasses and mixins contribute nothing; cycles are
/// broken. This never fails.
pub fn flatten<'a>(
    package: &'a Package,
    module: &'a Module,
    element: &'a CustomElementDeclaration,
) -> FlattenedMembers {
    let start = VisitKey::new(&module.path, &element.name);
    let mut acc = Accumulator::default();

    for superclass in superclass_chain(package, start, &element.class) {
        acc.absorb_inherited(&superclass);
    }
    for mixin in mixin_chain(package, start, &element.class) {
        acc.absorb_inherited(&mixin);
    }
    acc.absorb(Some(&element.element), Some(&element.class), None);

    let flattened = acc.finish();
    debug!(
        element = %element.name,
        module = %module.path,
        attributes = flattened.attributes.len(),
        fields = flattened.fields.len(),
        methods = flattened.methods.len(),
        "flattened custom element"
    );
    flattened
}
