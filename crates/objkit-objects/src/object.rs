//! Key/value operations on JSON objects.

use objkit_common::warning::warn_once;
use serde_json::{Map, Number, Value};

/// A JSON object with insertion-ordered keys.
pub type Object = Map<String, Value>;

/// Copy every key of `obj` into a new object.
///
/// ```
/// use objkit_objects::shallow_copy;
/// use serde_json::json;
///
/// let original = json!({"a": 2, "b": {"a": [1, 2, 3]}});
/// let copy = shallow_copy(original.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(copy), original);
/// ```
#[must_use]
pub fn shallow_copy(obj: &Object) -> Object {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Merge `objects` left to right into one object.
///
/// When a key is present more than once the values are added: numbers are
/// summed (as integers when both are integers) and strings concatenated.
/// Any other pair cannot be added; the later value replaces the earlier one
/// and a warning is printed.
///
/// ```
/// use objkit_objects::merge_objects;
/// use serde_json::json;
///
/// let a = json!({"a": 1, "b": 2});
/// let b = json!({"b": 3, "c": 5});
/// let merged = merge_objects(&[a.as_object().unwrap().clone(), b.as_object().unwrap().clone()]);
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": 1, "b": 5, "c": 5}));
/// ```
#[must_use]
pub fn merge_objects(objects: &[Object]) -> Object {
    let mut merged = Object::new();
    for object in objects {
        for (key, value) in object {
            match merged.get_mut(key) {
                Some(existing) => *existing = add_values(key, existing.take(), value.clone()),
                None => {
                    let _ = merged.insert(key.clone(), value.clone());
                }
            }
        }
    }
    merged
}

fn add_values(key: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => {
            if let Some(sum) = add_numbers(a, b) {
                return Value::Number(sum);
            }
        }
        (Value::String(a), Value::String(b)) => return Value::String(format!("{a}{b}")),
        _ => {}
    }
    warn_once(
        "merge",
        &format!("cannot add {left} and {right} for key \"{key}\", keeping {right}"),
    );
    right
}

fn add_numbers(a: &Number, b: &Number) -> Option<Number> {
    a.as_i64()
        .zip(b.as_i64())
        .and_then(|(x, y)| x.checked_add(y))
        .map(Number::from)
        .or_else(|| {
            a.as_u64()
                .zip(b.as_u64())
                .and_then(|(x, y)| x.checked_add(y))
                .map(Number::from)
        })
        .or_else(|| Number::from_f64(a.as_f64()? + b.as_f64()?))
}

/// Remove `keys` from `obj`. Keys that are not present are ignored.
///
/// ```
/// use objkit_objects::remove_properties;
/// use serde_json::json;
///
/// let obj = json!({"a": 1, "b": 2, "c": 3}).as_object().unwrap().clone();
/// let left = remove_properties(obj, &["b", "c"]);
/// assert_eq!(serde_json::Value::Object(left), json!({"a": 1}));
/// ```
#[must_use]
pub fn remove_properties(mut obj: Object, keys: &[&str]) -> Object {
    for key in keys {
        let _ = obj.shift_remove(*key);
    }
    obj
}

/// Whether both objects hold the same keys with equal values.
/// Key order does not matter.
#[must_use]
pub fn compare_objects(a: &Object, b: &Object) -> bool {
    a == b
}

/// Whether `obj` has no keys.
#[must_use]
pub fn is_empty_object(obj: &Object) -> bool {
    obj.is_empty()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: &Value) -> Object {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_add_integers_stays_integer() {
        let sum = add_values("k", json!(2), json!(3));
        assert_eq!(sum, json!(5));
        assert!(sum.is_i64());
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add_values("k", json!(1.5), json!(2)), json!(3.5));
    }

    #[test]
    fn test_add_mismatched_keeps_right() {
        assert_eq!(add_values("k", json!(1), json!("x")), json!("x"));
        assert!(objkit_common::warning::has_warned(
            "merge",
            "cannot add 1 and \"x\" for key \"k\", keeping \"x\""
        ));
    }

    #[test]
    fn test_remove_preserves_order() {
        let obj = object(&json!({"z": 1, "y": 2, "x": 3}));
        let left = remove_properties(obj, &["y"]);
        assert_eq!(left.keys().collect::<Vec<_>>(), vec!["z", "x"]);
    }
}
