use serde::{Deserialize, Serialize};

/// A rectangle with a computed area.
///
/// ```
/// use objkit_objects::Rectangle;
///
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.width, 10.0);
/// assert_eq!(r.height, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A circle, mostly useful as a `from_json` target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Distance from the centre to the edge.
    pub radius: f64,
}

impl Circle {
    /// `π r²`
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
