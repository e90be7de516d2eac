//! Cloned documents are fully independent of their source.

use cem::manifest::{
    ClassMember, CssPart, Declaration, Deprecated, Export, Package, Reference, Slot,
};

use crate::helpers::manifest_fixtures::EVERY_VARIANT;
use crate::helpers::model_helpers::decode_clean;

fn every_variant() -> Package {
    decode_clean(EVERY_VARIANT).package
}

#[test]
fn test_package_and_module_clone() {
    let original = every_variant();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.deprecated = Deprecated::None;
    copy.readme = Some("CHANGED.md".into());
    copy.modules[0].path = "src/moved.js".into();
    copy.modules[0].deprecated = Deprecated::Flag(false);
    copy.modules[0].declarations.clear();

    assert_eq!(original.deprecated, Deprecated::Flag(true));
    assert_eq!(original.readme, None);
    assert_eq!(original.modules[0].path, "src/all.js");
    assert_eq!(
        original.modules[0].deprecated,
        Deprecated::Reason("moved".into())
    );
    assert_eq!(original.modules[0].declarations.len(), 6);
}

#[test]
fn test_every_declaration_variant_clone() {
    let original = every_variant();
    let mut copy = original.clone();

    for declaration in &mut copy.modules[0].declarations {
        match declaration {
            Declaration::Class(class) => class.class.members.clear(),
            Declaration::CustomElement(element) => {
                element.element.tag_name = "x-renamed".into();
                element.add_or_update_part(CssPart::new("added"));
            }
            Declaration::Mixin(mixin) => mixin.signature.parameters[0].name = "other".into(),
            Declaration::CustomElementMixin(mixin) => {
                mixin.element.slots[0].summary = "changed".into()
            }
            Declaration::Function(function) => function.signature.parameters.clear(),
            Declaration::Variable(variable) => variable.default = "'2.0'".into(),
        }
    }

    let declarations = &original.modules[0].declarations;
    let Declaration::Class(class) = &declarations[0] else {
        panic!("class")
    };
    assert_eq!(class.class.members.len(), 2);
    let Declaration::CustomElement(element) = &declarations[1] else {
        panic!("element")
    };
    assert_eq!(element.tag_name(), "x-element");
    assert!(element.element.css_parts.is_empty());
    let Declaration::Mixin(mixin) = &declarations[2] else {
        panic!("mixin")
    };
    assert_eq!(mixin.signature.parameters[0].name, "base");
    let Declaration::CustomElementMixin(mixin) = &declarations[3] else {
        panic!("ce mixin")
    };
    assert_eq!(mixin.element.slots[0].summary, "");
    let Declaration::Function(function) = &declarations[4] else {
        panic!("function")
    };
    assert_eq!(function.signature.parameters.len(), 1);
    let Declaration::Variable(variable) = &declarations[5] else {
        panic!("variable")
    };
    assert_eq!(variable.default, "'1.0'");
}

#[test]
fn test_every_member_variant_clone() {
    let original = every_variant();
    let mut copy = original.clone();

    let Declaration::Class(class) = &mut copy.modules[0].declarations[0] else {

        panic!("class")

    };
    for member in &mut class.class.members {
        *member.common_mut().summary = "changed".into();
        match member {
            ClassMember::Field(field) => field.default = "1".into(),
            ClassMember::Method(method) => method.signature.r#return = None,
            ClassMember::CustomElementField(_) => unreachable!(),
        }
    }
    let Declaration::CustomElement(element) = &mut copy.modules[0].declarations[1] else {
        panic!("element")
    };
    let ClassMember::CustomElementField(open) = &mut element.class.members[0] else {
        panic!("custom element field")
    };
    open.attribute = "is-open".into();
    open.field.inherited_from = Some(Reference::new("Elsewhere"));

    let Declaration::Class(class) = &original.modules[0].declarations[0] else {

        panic!("class")

    };
    assert!(class.class.members.iter().all(|m| m.summary().is_empty()));
    assert_eq!(class.class.members[0].as_field().unwrap().default, "0");
    let method = class.class.members[1].as_method().unwrap();
    assert!(method.signature.r#return.is_some());

    let Declaration::CustomElement(element) = &original.modules[0].declarations[1] else {
        panic!("element")
    };
    let open = element.class.members[0].as_custom_element_field().unwrap();
    assert_eq!(open.attribute, "open");
    assert_eq!(open.field.inherited_from, None);
}

#[test]
fn test_every_export_variant_clone() {
    let original = every_variant();
    let mut copy = original.clone();

    for export in &mut copy.modules[0].exports {
        match export {
            Export::JavaScript(js) => js.declaration.name = "Renamed".into(),
            Export::CustomElement(ce) => ce.deprecated = Deprecated::Flag(true),
        }
    }

    let exports = &original.modules[0].exports;
    assert_eq!(exports[0].declaration().name, "Plain");
    assert!(!exports[1].is_deprecated());
}

#[test]
fn test_original_mutation_leaves_clone_untouched() {
    let mut original = every_variant();
    let copy = original.clone();

    let Declaration::CustomElement(element) = &mut original.modules[0].declarations[1] else {
        panic!("element")
    };
    element.add_or_update_slot(Slot::new("late"));
    element.element.demos.clear();

    let Declaration::CustomElement(element) = &copy.modules[0].declarations[1] else {
        panic!("element")
    };
    assert!(element.element.slots.is_empty());
    assert_eq!(element.element.demos[0].url, "https://example.com/demo");
}
