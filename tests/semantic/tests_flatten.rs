use cem::manifest::Reference;
use cem::semantic::flatten;
use rstest::rstest;

use crate::helpers::manifest_fixtures::{DESIGN_SYSTEM, SUPERCLASS_CYCLE};
use crate::helpers::model_helpers::{decode_clean, element, names};

fn flatten_named(json: &str, name: &str) -> cem::FlattenedMembers {
    let package = decode_clean(json).package;
    let (module, _) = package
        .declarations()
        .find(|(_, decl)| decl.name() == name)
        .unwrap();
    flatten(&package, module, element(&package, name))
}

#[test]
fn test_design_system_button() {
    let flat = flatten_named(DESIGN_SYSTEM, "MyButton");

    let attributes = names(&flat.attributes, |a| a.name.as_str());
    assert_eq!(attributes, vec!["disabled", "theme", "variant"]);
    let slots = names(&flat.slots, |s| s.name.as_str());
    assert_eq!(slots, vec!["", "icon"]);
    let parts = names(&flat.css_parts, |p| p.name.as_str());
    assert_eq!(parts, vec!["button", "label"]);
    let events = names(&flat.events, |e| e.name.as_str());
    assert_eq!(events, vec!["focus-change"]);
    let states = names(&flat.css_states, |s| s.name.as_str());
    assert_eq!(states, vec!["focused"]);
    let properties = names(&flat.css_properties, |p| p.name.as_str());
    assert_eq!(properties, vec!["--base-color"]);

    let fields: Vec<_> = flat.fields.iter().map(|f| f.name()).collect();
    assert_eq!(fields, vec!["theme", "disabled", "variant"]);
    let methods = names(&flat.methods, |m| m.name.as_str());
    assert_eq!(methods, vec!["focus", "render"]);
}

#[test]
fn test_provenance_names_contributing_declaration() {
    let flat = flatten_named(DESIGN_SYSTEM, "MyButton");

    assert_eq!(
        flat.attribute("theme").unwrap().inherited_from,
        Some(Reference::new("BaseElement").with_module("src/base.js"))
    );
    assert_eq!(
        flat.attribute("disabled").unwrap().inherited_from,
        Some(Reference::new("Focusable").with_module("src/focusable.js"))
    );
    assert_eq!(flat.attribute("variant").unwrap().inherited_from, None);
    let disabled = flat.field("disabled").unwrap();
    let owner = disabled.inherited_from().map(|r| r.name.as_str());
    assert_eq!(owner, Some("Focusable"));
}

#[test]
fn test_provenance_survives_a_second_stage() {
    let flat = flatten_named(DESIGN_SYSTEM, "MyIconButton");

    let attributes = names(&flat.attributes, |a| a.name.as_str());
    assert_eq!(attributes, vec!["icon", "theme", "variant"]);
    let theme = flat.attribute("theme").unwrap();
    assert_eq!(
        theme.inherited_from.as_ref().unwrap().name,
        "BaseElement"
    );
    let variant = flat.attribute("variant").unwrap();
    assert_eq!(variant.inherited_from.as_ref().unwrap().name, "MyButton");
}

#[test]
fn test_override_concatenates_descriptions() {
    let flat = flatten_named(DESIGN_SYSTEM, "MyButton");
    let render = flat.method("render").unwrap();
    assert_eq!(render.description, "Button render.\n\nBase render.");
    assert_eq!(render.inherited_from, None);
}

#[rstest]
#[case::identical("base", "base")]
#[case::differing("child", "child\n\nbase")]
#[case::empty_override("", "base")]
fn test_override_description_backfill(#[case] own: &str, #[case] expected: &str) {
    let json = format!(
        r#"{{"modules":[{{"path":"a.js","declarations":[
            {{"kind":"class","customElement":true,"name":"Base","attributes":[{{"name":"foo","description":"base"}}]}},
            {{"kind":"class","customElement":true,"name":"Child","tagName":"x-child",
              "superclass":{{"name":"Base"}},"attributes":[{{"name":"foo","description":"{own}"}}]}}
        ]}}]}}"#
    );
    let flat = flatten_named(&json, "Child");
    assert_eq!(flat.attributes.len(), 1);
    assert_eq!(flat.attributes[0].description, expected);
    assert_eq!(flat.attributes[0].inherited_from, None);
}

#[test]
fn test_superclass_cycle_terminates() {
    let flat = flatten_named(SUPERCLASS_CYCLE, "Ping");
    let attributes = names(&flat.attributes, |a| a.name.as_str());
    assert_eq!(attributes, vec!["ping", "pong"]);

    let flat = flatten_named(SUPERCLASS_CYCLE, "Narcissus");
    let attributes = names(&flat.attributes, |a| a.name.as_str());
    assert_eq!(attributes, vec!["self"]);
    assert_eq!(flat.attributes[0].inherited_from, None);
}

#[test]
fn test_field_and_custom_element_field_share_a_key() {
    let json = r#"{"modules":[{"path":"a.js","declarations":[
        {"kind":"class","name":"Base","members":[{"kind":"field","name":"open","description":"plain"}]},
        {"kind":"class","customElement":true,"name":"El","tagName":"x-el","superclass":{"name":"Base"},
         "members":[{"kind":"field","name":"open","attribute":"open"},{"kind":"method","name":"open"}]}
    ]}]}"#;
    let flat = flatten_named(json, "El");

    assert_eq!(flat.fields.len(), 1);
    let open = flat.fields[0].as_custom_element_field().unwrap();
    assert_eq!(open.field.description, "plain");
    assert_eq!(flat.methods.len(), 1);
}
