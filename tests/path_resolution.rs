use serde_json::{Value, json};
use sortby::datatype::SortValue;
use sortby::selector::{Record, Selector};

#[test]
fn dot_path_resolves_a_nested_field() {
    let record = json!({"address": {"city": "Chicago"}});
    let selector: Selector<Value> = Selector::from("address.city");
    assert_eq!(selector.resolve(&record), SortValue::Text("Chicago".to_string()));
}

#[test]
fn null_intermediate_short_circuits() {
    let record = json!({"address": null});
    let selector: Selector<Value> = Selector::from("address.city");
    assert_eq!(selector.resolve(&record), SortValue::Null);
}

#[test]
fn missing_field_resolves_to_null() {
    let record = json!({"name": "Alice"});
    let selector: Selector<Value> = Selector::from("nonexistent");
    assert_eq!(selector.resolve(&record), SortValue::Null);
}

#[test]
fn missing_leaf_resolves_to_null() {
    let record = json!({"address": {"zip": 60601}});
    let selector: Selector<Value> = Selector::from("address.city");
    assert_eq!(selector.resolve(&record), SortValue::Null);
}

#[test]
fn numeric_segments_index_arrays() {
    let record = json!({"tags": ["red", "green"]});
    let first: Selector<Value> = Selector::from("tags.0");
    assert_eq!(first.resolve(&record), SortValue::Text("red".to_string()));
    let out_of_range: Selector<Value> = Selector::from("tags.5");
    assert_eq!(out_of_range.resolve(&record), SortValue::Null);
}

#[test]
fn explicit_segments_resolve_like_dot_paths() {
    let record = json!({"address": {"city": "Chicago"}});
    let from_array: Selector<Value> = Selector::from(["address", "city"]);
    let constructed: Selector<Value> = Selector::path(vec!["address", "city"]);
    assert_eq!(from_array.resolve(&record), SortValue::Text("Chicago".to_string()));
    assert_eq!(constructed.resolve(&record), SortValue::Text("Chicago".to_string()));
}

#[test]
fn scalar_intermediate_short_circuits() {
    let record = json!({"address": "not an object"});
    let selector: Selector<Value> = Selector::from("address.city");
    assert_eq!(selector.resolve(&record), SortValue::Null);
}

#[test]
fn non_scalar_leaf_degrades_to_text() {
    let record = json!({"address": {"city": "Chicago"}});
    let selector: Selector<Value> = Selector::from("address");
    assert!(matches!(selector.resolve(&record), SortValue::Text(_)));
}

#[test]
fn value_at_converts_json_scalars() {
    let record = json!({"flag": true, "count": 3, "label": "x"});
    assert_eq!(
        record.value_at(&["flag".to_string()]),
        SortValue::Boolean(true)
    );
    assert_eq!(
        record.value_at(&["count".to_string()]),
        SortValue::Number(3.0)
    );
    assert_eq!(
        record.value_at(&["label".to_string()]),
        SortValue::Text("x".to_string())
    );
}
