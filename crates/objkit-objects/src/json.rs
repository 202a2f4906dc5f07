use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ObjectsError;

/// Compact JSON text for `value`.
///
/// ```
/// use objkit_objects::{Rectangle, get_json};
///
/// assert_eq!(get_json(&[1, 2, 3])?, "[1,2,3]");
/// assert_eq!(get_json(&Rectangle::new(20.0, 10.0))?, r#"{"width":20.0,"height":10.0}"#);
/// # Ok::<(), objkit_objects::ObjectsError>(())
/// ```
///
/// # Errors
///
/// [`ObjectsError::Json`] if `value` cannot be represented as JSON, e.g. a
/// map with non-string keys.
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectsError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `json` into a `T`. The target type decides which fields are
/// expected and how they are interpreted.
///
/// ```
/// use objkit_objects::{Circle, from_json};
///
/// let circle: Circle = from_json(r#"{"radius":10}"#)?;
/// assert_eq!(circle.radius, 10.0);
/// # Ok::<(), objkit_objects::ObjectsError>(())
/// ```
///
/// # Errors
///
/// [`ObjectsError::Json`] if the text is not valid JSON or does not match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectsError> {
    Ok(serde_json::from_str(json)?)
}
