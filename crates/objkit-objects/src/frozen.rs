use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// A value that can be read but not changed.
///
/// `Frozen` only hands out shared references, so writes, removals and
/// insertions are rejected at compile time. [`Frozen::into_inner`] gives the
/// value back for callers that own it and want to thaw it explicitly.
///
/// ```
/// use objkit_objects::make_immutable;
/// use serde_json::json;
///
/// let frozen = make_immutable(json!({"a": 1, "b": 2}));
/// assert_eq!(frozen["a"], 1);
/// ```
///
/// ```compile_fail
/// use objkit_objects::make_immutable;
/// use serde_json::json;
///
/// let mut frozen = make_immutable(json!({"a": 1}));
/// frozen["a"] = json!(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Frozen<T>(T);

impl<T> Frozen<T> {
    /// Give up immutability and take the value back.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Wrap `value` so it can no longer be modified.
#[must_use]
pub const fn make_immutable<T>(value: T) -> Frozen<T> {
    Frozen(value)
}
