//! Re-encoding a decoded package yields the same package.

use cem::interchange::{decode, encode, encode_pretty};
use cem::manifest::{ClassMember, Declaration, Export};
use rstest::rstest;
use serde_json::Value;

use crate::helpers::manifest_fixtures::{DESIGN_SYSTEM, EVERY_VARIANT, SUPERCLASS_CYCLE};
use crate::helpers::model_helpers::decode_clean;

#[rstest]
#[case::design_system(DESIGN_SYSTEM)]
#[case::every_variant(EVERY_VARIANT)]
#[case::cycle(SUPERCLASS_CYCLE)]
fn test_decode_encode_decode_is_stable(#[case] json: &str) {
    let original = decode_clean(json).package;

    let compact = decode(&encode(&original).unwrap()).unwrap();
    assert!(compact.warnings.is_empty());
    assert_eq!(compact.package, original);

    let pretty = decode(&encode_pretty(&original).unwrap()).unwrap();
    assert_eq!(pretty.package, original);
}

#[test]
fn test_every_variant_decodes_to_its_type() {
    let package = decode_clean(EVERY_VARIANT).package;
    let module = &package.modules[0];

    let kinds: Vec<_> = module
        .declarations
        .iter()
        .map(|decl| match decl {
            Declaration::Class(_) => "class",
            Declaration::CustomElement(_) => "custom-element",
            Declaration::Mixin(_) => "mixin",
            Declaration::CustomElementMixin(_) => "custom-element-mixin",
            Declaration::Function(_) => "function",
            Declaration::Variable(_) => "variable",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "class",
            "custom-element",
            "mixin",
            "custom-element-mixin",
            "function",
            "variable",
        ]
    );

    let Declaration::Class(plain) = &module.declarations[0] else {
        panic!("Expected a plain class");
    };
    assert!(matches!(plain.class.members[0], ClassMember::Field(_)));
    assert!(matches!(plain.class.members[1], ClassMember::Method(_)));

    let Declaration::CustomElement(element) = &module.declarations[1] else {
        panic!("Expected a custom element");
    };
    let open = element.class.members[0].as_custom_element_field().unwrap();
    assert_eq!(open.attribute, "open");
    assert!(open.reflects);

    assert!(matches!(module.exports[0], Export::JavaScript(_)));
    assert!(matches!(module.exports[1], Export::CustomElement(_)));
}

#[test]
fn test_encoding_omits_empty_collections() {
    let package = decode_clean(SUPERCLASS_CYCLE).package;
    let value: Value = serde_json::from_slice(&encode(&package).unwrap()).unwrap();

    let module = &value["modules"][0];
    assert!(module.get("exports").is_none());
    let ping = &module["declarations"][0];
    assert!(ping.get("members").is_none());
    assert!(ping.get("slots").is_none());
    assert!(ping.get("deprecated").is_none());
    assert_eq!(ping["kind"], "class");
    assert_eq!(ping["customElement"], true);
}

#[test]
fn test_custom_element_mixin_encodes_as_flagged_mixin() {
    let package = decode_clean(EVERY_VARIANT).package;
    let value: Value = serde_json::from_slice(&encode(&package).unwrap()).unwrap();

    let mixin = &value["modules"][0]["declarations"][3];
    assert_eq!(mixin["kind"], "mixin");
    assert_eq!(mixin["customElement"], true);

    let plain_mixin = &value["modules"][0]["declarations"][2];
    assert!(plain_mixin.get("customElement").is_none());
}

#[test]
fn test_module_paths_are_normalized_on_construction() {
    let module = cem::manifest::Module::new("./src/button.ts");
    assert_eq!(module.path, "src/button.js");
}
