use cem::manifest::Reference;
use cem::semantic::{VisitKey, find_declaration, mixin_chain, superclass_chain};

use crate::helpers::manifest_fixtures::{DESIGN_SYSTEM, SUPERCLASS_CYCLE};
use crate::helpers::model_helpers::{decode_clean, element};

#[test]
fn test_find_declaration_honours_module() {
    let package = decode_clean(DESIGN_SYSTEM).package;

    let found = find_declaration(&package, &Reference::new("MyButton")).unwrap();
    assert_eq!(found.module.path, "src/button.js");

    let scoped = Reference::new("MyButton").with_module("./src/button.ts");
    assert!(find_declaration(&package, &scoped).is_some());

    let wrong_module = Reference::new("MyButton").with_module("src/base.js");
    assert!(find_declaration(&package, &wrong_module).is_none());
}

#[test]
fn test_resolved_reference_names_its_module() {
    let package = decode_clean(DESIGN_SYSTEM).package;
    let found = find_declaration(&package, &Reference::new("Focusable")).unwrap();
    assert_eq!(
        found.reference(),
        Reference::new("Focusable").with_module("src/focusable.js")
    );
}

#[test]
fn test_superclass_chain_is_base_first() {
    let package = decode_clean(DESIGN_SYSTEM).package;
    let icon_button = element(&package, "MyIconButton");

    let chain = superclass_chain(
        &package,
        VisitKey::new("src/button.js", &icon_button.name),
        &icon_button.class,
    );
    let names: Vec<_> = chain.iter().map(|r| r.declaration.name()).collect();
    assert_eq!(names, vec!["BaseElement", "MyButton"]);
}

#[test]
fn test_mixin_chain_skips_non_mixins() {
    let package = decode_clean(DESIGN_SYSTEM).package;
    let mut button = element(&package, "MyButton").clone();
    button.class.mixins.push(Reference::new("BaseElement"));

    let start = VisitKey::new("src/button.js", "MyButton");
    let chain = mixin_chain(&package, start, &button.class);
    let names: Vec<_> = chain.iter().map(|r| r.declaration.name()).collect();
    assert_eq!(names, vec!["Focusable"]);
}

#[test]
fn test_chains_terminate_on_cycles() {
    let package = decode_clean(SUPERCLASS_CYCLE).package;

    let ping = element(&package, "Ping");
    let start = VisitKey::new("src/cycle.js", "Ping");
    let chain = superclass_chain(&package, start, &ping.class);
    let names: Vec<_> = chain.iter().map(|r| r.declaration.name()).collect();
    assert_eq!(names, vec!["Pong"]);

    let narcissus = element(&package, "Narcissus");
    let start = VisitKey::new("src/cycle.js", "Narcissus");
    assert!(superclass_chain(&package, start, &narcissus.class).is_empty());
    assert!(mixin_chain(&package, start, &narcissus.class).is_empty());
}
