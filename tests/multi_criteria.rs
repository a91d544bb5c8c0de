use serde_json::{Value, json};
use sortby::comparator::{Criterion, by_criteria, by_keys};
use sortby::datatype::Order;

fn users() -> Vec<Value> {
    vec![
        json!({"name": "Alice", "age": 30, "address": {"city": "New York", "zip": 10001}, "logins": 10}),
        json!({"name": "Bob", "age": 25, "address": {"city": "Los Angeles", "zip": 90001}, "logins": 25}),
        json!({"name": "Charlie", "age": 30, "address": {"city": "Chicago", "zip": 60601}, "logins": null}),
        json!({"name": "David", "age": 28, "address": {"city": "New York", "zip": 10002}, "logins": 5}),
    ]
}

fn names(rows: &[Value]) -> Vec<String> {
    rows.iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn ties_cascade_to_the_next_criterion() {
    let mut rows = users();
    rows.sort_by(by_criteria([
        Criterion::desc("age"),
        Criterion::asc("name"),
    ]));
    assert_eq!(names(&rows), ["Alice", "Charlie", "David", "Bob"]);
}

#[test]
fn each_criterion_carries_its_own_direction() {
    let mut rows = users();
    rows.sort_by(by_criteria([
        Criterion::asc("address.city"),
        Criterion::desc("age"),
    ]));
    assert_eq!(names(&rows), ["Charlie", "Bob", "Alice", "David"]);
    let cities: Vec<&str> = rows
        .iter()
        .map(|r| r["address"]["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, ["Chicago", "Los Angeles", "New York", "New York"]);
    let ages: Vec<i64> = rows.iter().map(|r| r["age"].as_i64().unwrap()).collect();
    assert_eq!(ages, [30, 25, 30, 28]);
}

#[test]
fn bare_selectors_share_one_order() {
    let mut rows = users();
    rows.sort_by(by_keys(["address.city", "name"], Order::Descending));
    assert_eq!(names(&rows), ["David", "Alice", "Bob", "Charlie"]);
}

#[test]
fn first_decisive_criterion_wins() {
    let mut rows = users();
    // age already separates Bob and David; the name tier must not reorder them
    rows.sort_by(by_criteria([
        Criterion::asc("age"),
        Criterion::desc("name"),
    ]));
    assert_eq!(names(&rows), ["Bob", "David", "Charlie", "Alice"]);
}

#[test]
fn a_full_tie_returns_equal_and_keeps_input_order() {
    let mut rows = users();
    rows.sort_by(by_criteria::<Value, _>([Criterion::asc("nonexistent")]));
    assert_eq!(names(&rows), ["Alice", "Bob", "Charlie", "David"]);
}
