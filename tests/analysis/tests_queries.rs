use cem::QueryError;

use crate::helpers::manifest_fixtures::DESIGN_SYSTEM;
use crate::helpers::model_helpers::host_for;

#[test]
fn test_tag_context() {
    let host = host_for(DESIGN_SYSTEM);
    let context = host.tag("my-button").unwrap();

    assert_eq!(context.declaration.name, "MyButton");
    assert_eq!(context.module.path, "src/button.js");
    assert_eq!(context.custom_element_export.unwrap().name, "my-button");
    assert_eq!(context.javascript_export.unwrap().name, "MyButton");
}

#[test]
fn test_unknown_tag_is_distinct_from_empty() {
    let host = host_for(DESIGN_SYSTEM);

    assert_eq!(
        host.tag_events("my-missing").unwrap_err(),
        QueryError::TagNotFound("my-missing".into())
    );
    assert!(host.tag_events("my-icon-button").unwrap().is_empty());
    assert!(host.tag_css_states("my-icon-button").unwrap().is_empty());
}

#[test]
fn test_custom_elements_in_document_order() {
    let host = host_for(DESIGN_SYSTEM);
    let tags: Vec<_> = host.custom_elements().iter().map(|c| c.tag_name).collect();
    assert_eq!(tags, vec!["my-button", "my-icon-button"]);
    assert_eq!(host.package().all_tag_names(), tags);
}

#[test]
fn test_tag_attributes_pair_reflecting_fields() {
    let host = host_for(DESIGN_SYSTEM);
    let entries = host.tag_attributes("my-button").unwrap();

    let attributes: Vec<_> = entries.iter().map(|e| e.attribute.name.as_str()).collect();
    let fields: Vec<_> = entries
        .iter()
        .map(|e| e.field.map(|f| f.field.name.as_str()))
        .collect();
    assert_eq!(attributes, vec!["disabled", "theme", "variant"]);
    assert_eq!(
        fields,
        vec![Some("disabled"), Some("theme"), Some("variant")]
    );

    let theme = entries[1].field.unwrap();
    assert!(theme.reflects);
    assert_eq!(
        theme.field.inherited_from.as_ref().unwrap().name,
        "BaseElement"
    );
}

#[test]
fn test_facet_queries_read_flattened_view() {
    let host = host_for(DESIGN_SYSTEM);

    let slots: Vec<_> = host
        .tag_slots("my-icon-button")
        .unwrap()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(slots, vec!["", "icon"]);

    let methods: Vec<_> = host
        .tag_methods("my-button")
        .unwrap()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(methods, vec!["focus", "render"]);

    let parts = host.tag_css_parts("my-icon-button").unwrap();
    assert_eq!(parts.len(), 2);
    for part in parts {
        assert_eq!(part.inherited_from.as_ref().unwrap().name, "MyButton");
    }

    let properties = host.tag_css_properties("my-button").unwrap();
    assert_eq!(properties[0].syntax, "<color>");
}

#[test]
fn test_deprecated_element_is_reported() {
    let host = host_for(DESIGN_SYSTEM);
    let context = host.tag("my-icon-button").unwrap();
    assert!(context.declaration.is_deprecated());
    assert_eq!(
        context.declaration.deprecated.reason(),
        Some("Use my-button with an icon slot.")
    );
}
