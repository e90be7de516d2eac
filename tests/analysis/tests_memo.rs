use std::ptr;
use std::sync::Barrier;
use std::thread;

use cem::ManifestHost;

use crate::helpers::manifest_fixtures::DESIGN_SYSTEM;
use crate::helpers::model_helpers::{decode_clean, element, host_for};

#[test]
fn test_flattened_members_computed_once() {
    let host = host_for(DESIGN_SYSTEM);
    let button = element(host.package(), "MyButton");

    let first = host.flattened_members(button);
    let second = host.flattened_members(button);
    assert!(ptr::eq(first, second));
    assert_eq!(host.stats().flatten_computations(), 1);
}

#[test]
fn test_attribute_field_map_built_once() {
    let host = host_for(DESIGN_SYSTEM);
    let button = element(host.package(), "MyButton");

    let first = host.attribute_field_for(button, "variant").unwrap();
    let second = host.attribute_field_for(button, "variant").unwrap();
    assert!(ptr::eq(first, second));
    assert!(host.attribute_field_for(button, "theme").is_none());
    assert_eq!(host.stats().attribute_map_builds(), 1);
}

#[test]
fn test_export_maps_built_once_per_module() {
    let host = host_for(DESIGN_SYSTEM);
    let module = &host.package().modules[2];

    let (custom_element, javascript) = host.export_for(module, "MyButton");
    assert_eq!(custom_element.unwrap().name, "my-button");
    assert_eq!(javascript.unwrap().name, "MyButton");

    let (custom_element, javascript) = host.export_for(module, "MyIconButton");
    assert_eq!(custom_element.unwrap().name, "my-icon-button");
    assert!(javascript.is_none());

    assert_eq!(host.stats().export_map_builds(), 1);
}

#[test]
fn test_concurrent_callers_share_one_computation() {
    const CALLERS: usize = 8;

    let host = host_for(DESIGN_SYSTEM);
    let button = element(host.package(), "MyButton");
    let barrier = Barrier::new(CALLERS);

    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    ptr::from_ref(host.flattened_members(button)).addr()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(host.stats().flatten_computations(), 1);
}

#[test]
fn test_identity_not_value_keys_the_cache() {
    let host = host_for(DESIGN_SYSTEM);
    let other = decode_clean(DESIGN_SYSTEM).package;
    let foreign = element(&other, "MyButton");

    assert_eq!(foreign, element(host.package(), "MyButton"));
    assert!(host.flattened_members(foreign).is_empty());
    assert!(host.attribute_field_for(foreign, "variant").is_none());
    assert_eq!(host.export_for(&other.modules[2], "MyButton"), (None, None));
    assert_eq!(host.stats().flatten_computations(), 0);
}

#[test]
fn test_flatten_all_fills_every_cell() {
    let host = host_for(DESIGN_SYSTEM);
    let all = host.flatten_all();
    let computed = host.stats().flatten_computations();
    assert_eq!(computed, all.len());

    for (element, flattened) in &all {
        assert!(ptr::eq(*flattened, host.flattened_members(element)));
    }
    assert_eq!(host.stats().flatten_computations(), computed);
}

#[test]
fn test_cloned_host_starts_with_fresh_caches() {
    let host = host_for(DESIGN_SYSTEM);
    let button = element(host.package(), "MyButton");
    let original = host.flattened_members(button).clone();

    let copy: ManifestHost = host.clone();
    assert_eq!(copy.stats().flatten_computations(), 0);
    let copied_button = element(copy.package(), "MyButton");
    assert!(!ptr::eq(button, copied_button));
    assert_eq!(copy.flattened_members(copied_button), &original);
    assert_eq!(copy.stats().flatten_computations(), 1);
}
