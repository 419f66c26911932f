//! 2D point in canvas coordinates.

use serde::{Deserialize, Serialize};

/// A point in canvas space.
///
/// Canvas space follows the usual screen convention: x grows to the
/// right, y grows downward, and positive rotation angles turn
/// clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Rotate this point about `origin` by `angle_degrees`.
    ///
    /// Positive angles rotate clockwise on screen (y-down coordinates).
    pub fn rotated_about(&self, origin: Point, angle_degrees: f64) -> Point {
        let rad = angle_degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Point {
            x: (self.x - origin.x) * cos - (self.y - origin.y) * sin + origin.x,
            y: (self.x - origin.x) * sin + (self.y - origin.y) * cos + origin.y,
        }
    }
}
