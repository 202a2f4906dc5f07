//! Integration tests for the object utilities, JSON helpers and collections.

use std::collections::HashMap;

use objkit_objects::{
    Circle, CityEntry, Object, Rectangle, compare_objects, from_json, get_json, group,
    is_empty_object, make_immutable, make_word, merge_objects, remove_properties, shallow_copy,
    sort_cities_array,
};
use serde_json::{Value, json};

fn object(value: Value) -> Object {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

// ========== objects ==========

#[test]
fn test_shallow_copy_is_independent() {
    let original = object(json!({"a": 2, "b": {"a": [1, 2, 3]}}));
    let mut copy = shallow_copy(&original);
    assert_eq!(copy, original);

    let _ = copy.insert("c".to_string(), json!(1));
    assert!(!original.contains_key("c"));
}

#[test]
fn test_shallow_copy_empty() {
    assert!(shallow_copy(&Object::new()).is_empty());
}

#[test]
fn test_merge_sums_overlapping_keys() {
    let merged = merge_objects(&[
        object(json!({"a": 1, "b": 2})),
        object(json!({"b": 3, "c": 5})),
    ]);
    assert_eq!(Value::Object(merged), json!({"a": 1, "b": 5, "c": 5}));
}

#[test]
fn test_merge_more_than_two() {
    let merged = merge_objects(&[
        object(json!({"a": 1})),
        object(json!({"a": 2, "b": 1})),
        object(json!({"a": 3, "b": 0.5})),
    ]);
    assert_eq!(Value::Object(merged), json!({"a": 6, "b": 1.5}));
}

#[test]
fn test_merge_keeps_first_seen_key_order() {
    let merged = merge_objects(&[
        object(json!({"z": 1, "a": 1})),
        object(json!({"a": 1, "m": 1})),
    ]);
    assert_eq!(merged.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
}

#[test]
fn test_merge_strings_concatenate() {
    let merged = merge_objects(&[object(json!({"s": "ab"})), object(json!({"s": "cd"}))]);
    assert_eq!(merged["s"], "abcd");
}

#[test]
fn test_merge_empty() {
    assert!(merge_objects(&[]).is_empty());
}

#[test]
fn test_remove_properties() {
    let obj = object(json!({"a": 1, "b": 2, "c": 3}));
    assert_eq!(
        Value::Object(remove_properties(obj.clone(), &["b", "c"])),
        json!({"a": 1})
    );
    assert_eq!(remove_properties(obj.clone(), &["d", "e"]), obj);

    let person = object(json!({"name": "John", "age": 30, "city": "New York"}));
    assert_eq!(
        Value::Object(remove_properties(person, &["age"])),
        json!({"name": "John", "city": "New York"})
    );
}

#[test]
fn test_compare_objects() {
    let a = object(json!({"a": 1, "b": 2}));
    assert!(compare_objects(&a, &object(json!({"b": 2, "a": 1}))));
    assert!(!compare_objects(&a, &object(json!({"a": 1, "b": 3}))));
    // Extra keys on either side make the objects differ.
    assert!(!compare_objects(&a, &object(json!({"a": 1, "b": 2, "c": 3}))));
    assert!(!compare_objects(&object(json!({"a": 1, "b": 2, "c": 3})), &a));
}

#[test]
fn test_is_empty_object() {
    assert!(is_empty_object(&Object::new()));
    assert!(!is_empty_object(&object(json!({"a": 1}))));
}

#[test]
fn test_make_immutable_reads_through() {
    let frozen = make_immutable(object(json!({"a": 1, "b": 2})));
    assert_eq!(frozen.get("a"), Some(&json!(1)));
    assert_eq!(frozen.len(), 2);
    assert_eq!(get_json(&frozen).unwrap(), r#"{"a":1,"b":2}"#);

    let mut thawed = frozen.into_inner();
    let _ = thawed.insert("c".to_string(), json!(3));
    assert_eq!(thawed.len(), 3);
}

// ========== words ==========

#[test]
fn test_make_word() {
    let letters = HashMap::from([('a', vec![0, 1]), ('b', vec![2, 3]), ('c', vec![4, 5])]);
    assert_eq!(make_word(&letters), "aabbcc");

    let hello = HashMap::from([
        ('H', vec![0]),
        ('e', vec![1]),
        ('l', vec![2, 3, 8]),
        ('o', vec![4, 6]),
        ('W', vec![5]),
        ('r', vec![7]),
        ('d', vec![9]),
    ]);
    assert_eq!(make_word(&hello), "HelloWorld");
}

#[test]
fn test_make_word_empty_and_gaps() {
    assert_eq!(make_word(&HashMap::new()), "");
    assert_eq!(make_word(&HashMap::from([('x', vec![])])), "");
    assert_eq!(make_word(&HashMap::from([('a', vec![0]), ('b', vec![3])])), "ab");
}

#[test]
fn test_make_word_far_positions() {
    let letters = HashMap::from([('a', vec![usize::MAX]), ('b', vec![0])]);
    assert_eq!(make_word(&letters), "ba");

    let letters = HashMap::from([('z', vec![usize::MAX / 2]), ('y', vec![usize::MAX / 4, 7])]);
    assert_eq!(make_word(&letters), "yyz");
}

// ========== shapes and JSON ==========

#[test]
fn test_rectangle() {
    let r = Rectangle::new(10.0, 20.0);
    assert!((r.width - 10.0).abs() < f64::EPSILON);
    assert!((r.height - 20.0).abs() < f64::EPSILON);
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_get_json() {
    assert_eq!(get_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
    assert_eq!(
        get_json(&json!({"height": 10, "width": 20})).unwrap(),
        r#"{"height":10,"width":20}"#
    );
}

#[test]
fn test_from_json_into_type() {
    let circle: Circle = from_json(r#"{"radius":10}"#).unwrap();
    assert!((circle.radius - 10.0).abs() < f64::EPSILON);
    assert!((circle.area() - std::f64::consts::PI * 100.0).abs() < 1e-9);

    let rect: Rectangle = from_json(&get_json(&Rectangle::new(3.0, 4.0)).unwrap()).unwrap();
    assert_eq!(rect, Rectangle::new(3.0, 4.0));
}

#[test]
fn test_from_json_rejects_wrong_shape() {
    let err = from_json::<Circle>(r#"{"width":10}"#).unwrap_err();
    assert!(err.to_string().starts_with("JSON error:"));
    assert!(from_json::<Circle>("not json").is_err());
}

// ========== collections ==========

fn cities() -> Vec<CityEntry> {
    vec![
        CityEntry::new("Russia", "Moscow"),
        CityEntry::new("Belarus", "Minsk"),
        CityEntry::new("Poland", "Warsaw"),
        CityEntry::new("Russia", "Saint Petersburg"),
        CityEntry::new("Poland", "Krakow"),
        CityEntry::new("Belarus", "Brest"),
    ]
}

#[test]
fn test_sort_cities_array() {
    assert_eq!(
        sort_cities_array(cities()),
        vec![
            CityEntry::new("Belarus", "Brest"),
            CityEntry::new("Belarus", "Minsk"),
            CityEntry::new("Poland", "Krakow"),
            CityEntry::new("Poland", "Warsaw"),
            CityEntry::new("Russia", "Moscow"),
            CityEntry::new("Russia", "Saint Petersburg"),
        ]
    );
}

#[test]
fn test_group_by_country() {
    let entries = vec![
        CityEntry::new("Belarus", "Brest"),
        CityEntry::new("Russia", "Omsk"),
        CityEntry::new("Russia", "Samara"),
        CityEntry::new("Belarus", "Grodno"),
        CityEntry::new("Belarus", "Minsk"),
        CityEntry::new("Poland", "Lodz"),
    ];
    let grouped = group(entries, |c| c.country.clone(), |c| c.city.clone());

    let collected: Vec<(String, Vec<String>)> = grouped.into_iter().collect();
    assert_eq!(
        collected,
        vec![
            (
                "Belarus".to_string(),
                vec!["Brest".to_string(), "Grodno".to_string(), "Minsk".to_string()]
            ),
            (
                "Russia".to_string(),
                vec!["Omsk".to_string(), "Samara".to_string()]
            ),
            ("Poland".to_string(), vec!["Lodz".to_string()]),
        ]
    );
}

#[test]
fn test_group_lookup() {
    let grouped = group(1..=6, |n| n % 2 == 0, |n| n * 10);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped.get(&true), Some(&[20, 40, 60][..]));
    assert_eq!(grouped.get(&false), Some(&[10, 30, 50][..]));
    assert!(!grouped.is_empty());
}

#[test]
fn test_group_equality_follows_entries() {
    let evens = group(1..=6, |n| n % 2 == 0, |n| n * 10);
    assert_eq!(evens, group(1..=6, |n| n % 2 == 0, |n| n * 10));
    assert_ne!(evens, group([2, 1], |n| n % 2 == 0, |n| n * 10));
}
