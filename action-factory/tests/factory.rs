//! End-to-end behavior of factories and creators

use action_factory::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Todo {
    id: u32,
    title: String,
}

fn meta(value: serde_json::Value) -> Metadata {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("metadata must be an object"),
    }
}

#[test]
fn test_creator_tag_matches_built_actions() {
    let factory = ActionFactory::with_namespace("todos");
    let add = factory.action::<Todo>("ADD").unwrap();

    let action = add.create(Todo {
        id: 1,
        title: "milk".into(),
    });

    assert_eq!(action.kind, add.action_type());
    assert!(add.matches(&action));
    assert!(is_type(&action, &add));
    assert_eq!(format!("{}", add), "todos/ADD");
}

#[test]
fn test_strict_duplicate_fails_on_second_call() {
    let factory = FactoryConfig::new().strict(true).build();
    factory.action::<()>("ONCE").unwrap();

    let err = factory.action::<u8>("ONCE").unwrap_err();
    assert!(matches!(err, FactoryError::DuplicateType { ref action_type } if action_type == "ONCE"));
    assert!(err.to_string().contains("ONCE"));
}

#[test]
fn test_lenient_factory_allows_duplicates() {
    let factory = FactoryConfig::new().strict(false).build();
    let a = factory.action::<()>("SAME").unwrap();
    let b = factory.action::<()>("SAME").unwrap();

    // Both creators recognize each other's actions
    assert!(a.matches(&b.empty()));
    assert!(b.matches(&a.empty()));
}

#[test]
fn test_namespace_update_leaves_existing_actions() {
    let factory = ActionFactory::with_namespace("ns1");
    let foo = factory.action::<u8>("FOO").unwrap();
    let before = foo.create(1);

    factory.update_namespace("ns2");
    let after = foo.create(2);

    assert_eq!(before.kind, "ns1/FOO");
    assert_eq!(after.kind, "ns2/FOO");
    assert_eq!(foo.origin_type(), "FOO");
    assert!(foo.matches(&after));
    assert!(!foo.matches(&before));
}

#[test]
fn test_predicate_error_flag_is_absent_when_false() {
    let factory = ActionFactory::new();
    let reading = factory
        .action_with::<i64>(
            "READING",
            CreatorOptions::new().error(ErrorSpec::predicate(|v: &i64| *v < 0)),
        )
        .unwrap();

    let bad = serde_json::to_value(reading.create(-5)).unwrap();
    let good = serde_json::to_value(reading.create(5)).unwrap();

    assert_eq!(bad, json!({ "type": "READING", "payload": -5, "error": true }));
    assert_eq!(good, json!({ "type": "READING", "payload": 5 }));
}

#[test]
fn test_metadata_merge() {
    let factory = ActionFactory::new();
    let tracked = factory
        .action_with::<()>("TRACKED", CreatorOptions::new().meta(meta(json!({ "a": 1 }))))
        .unwrap();

    let merged = tracked.create_with_meta((), meta(json!({ "b": 2 })));
    let overridden = tracked.create_with_meta((), meta(json!({ "a": 3 })));

    assert_eq!(merged.meta, Some(meta(json!({ "a": 1, "b": 2 }))));
    assert_eq!(overridden.meta, Some(meta(json!({ "a": 3 }))));
}

#[test]
fn test_meta_absent_without_sources() {
    let factory = ActionFactory::new();
    let plain = factory.action::<()>("PLAIN").unwrap();

    let value = serde_json::to_value(plain.empty()).unwrap();
    assert_eq!(value, json!({ "type": "PLAIN", "payload": null }));
}

#[test]
fn test_narrow_raw_action() {
    let factory = ActionFactory::with_namespace("todos");
    let add = factory.action::<Todo>("ADD").unwrap();
    let remove = factory.action::<u32>("REMOVE").unwrap();

    let raw: RawAction = serde_json::from_value(json!({
        "type": "todos/ADD",
        "payload": { "id": 2, "title": "bread" }
    }))
    .unwrap();

    assert!(remove.narrow(raw.clone()).unwrap().is_none());

    let typed = add.narrow(raw).unwrap().unwrap();
    assert_eq!(
        typed.payload,
        Todo {
            id: 2,
            title: "bread".into()
        }
    );
}

#[test]
fn test_strip_namespace() {
    let factory = ActionFactory::with_namespace("ns");
    let foo = factory.action::<()>("FOO").unwrap();

    assert_eq!(strip_namespace(foo.empty()).kind, "FOO");
    assert_eq!(strip_namespace(Action::new("FOO", ())).kind, "FOO");
    assert_eq!(strip_namespace(Action::new("a/b/c", ())).kind, "b");
}

#[test]
fn test_creators_cross_threads() {
    let factory = ActionFactory::with_namespace("bg");
    let tick = factory.action::<u64>("TICK").unwrap();

    let worker = {
        let tick = tick.clone();
        std::thread::spawn(move || tick.create(42))
    };
    let action = worker.join().unwrap();

    assert!(tick.matches(&action));
    assert_eq!(action.payload, 42);
}
