//! Lines as evaluable linear functions.
//!
//! A [`LinearFunction`] is a line through two distinct points, stored
//! as slope + intercept plus the defining endpoints. Vertical and
//! horizontal lines are encoded explicitly instead of being rejected:
//! the axis a degenerate line cannot answer evaluates to a signed
//! sentinel infinity whose sign encodes the direction from the first
//! endpoint to the second.
//!
//! # Numeric Policy
//!
//! Parallel and degenerate detection use exact floating-point
//! comparison. The downstream constraint solver relies on the exact
//! sentinel values (`0`, `±∞`) these branches produce, so a tolerance
//! here would change clamp behavior at the margins. The cost is that
//! two nearly-parallel lines still intersect (far away), which is the
//! desired behavior for boundary corners.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Degeneracy class of a line, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Slant {
    /// Finite nonzero slope: both `eval` and `eval_inverse` are total.
    Oblique,
    /// Parallel to the x axis: `eval_inverse` has no finite answer.
    Horizontal,
    /// Parallel to the y axis: `eval` has no finite answer.
    Vertical,
}

/// A line through two distinct points, evaluable in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFunction {
    slope: f64,
    intercept: f64,
    slant: Slant,
    a: Point,
    b: Point,
}

/// JS-style sign: zero maps to zero instead of `±1`.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl LinearFunction {
    /// Build the line through `a` and `b`.
    ///
    /// The two points must be distinct; the resulting value is
    /// immutable (all operations produce new lines).
    pub fn through(a: Point, b: Point) -> Self {
        debug_assert!(
            a != b,
            "a line requires two distinct points, got {a:?} twice"
        );
        let slope = (a.y - b.y) / (a.x - b.x);
        let intercept = a.y - slope * a.x;
        let slant = if a.x == b.x {
            Slant::Vertical
        } else if a.y == b.y {
            Slant::Horizontal
        } else {
            Slant::Oblique
        };
        Self {
            slope,
            intercept,
            slant,
            a,
            b,
        }
    }

    /// Axis-parallel line at the given x position.
    pub fn vertical(x: f64) -> Self {
        Self::through(Point::new(x, 0.0), Point::new(x, 1.0))
    }

    /// Axis-parallel line at the given y position.
    pub fn horizontal(y: f64) -> Self {
        Self::through(Point::new(0.0, y), Point::new(1.0, y))
    }

    /// Slope of the line (`±∞` for vertical lines).
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Y-intercept (meaningless for vertical lines).
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// First defining point.
    pub fn a(&self) -> Point {
        self.a
    }

    /// Second defining point.
    pub fn b(&self) -> Point {
        self.b
    }

    /// Evaluate y at `x`.
    ///
    /// For a vertical line there is no finite answer; the result is a
    /// signed infinity encoding the direction from `a` to `b`.
    pub fn eval(&self, x: f64) -> f64 {
        match self.slant {
            Slant::Horizontal => self.a.y,
            Slant::Vertical => sign(self.b.y - self.a.y) * f64::INFINITY,
            Slant::Oblique => self.slope * x + self.intercept,
        }
    }

    /// Evaluate x at `y` (the partial inverse of [`eval`](Self::eval)).
    ///
    /// For a horizontal line there is no finite answer; the result is
    /// a signed infinity encoding the direction from `a` to `b`.
    pub fn eval_inverse(&self, y: f64) -> f64 {
        match self.slant {
            Slant::Horizontal => sign(self.b.x - self.a.x) * f64::INFINITY,
            Slant::Vertical => self.a.x,
            Slant::Oblique => (y - self.intercept) / self.slope,
        }
    }

    /// Perpendicular distance from `p` to this line, signed by side.
    ///
    /// The sign comes from the cross product
    /// `(a.x-p.x)(b.y-p.y) - (a.y-p.y)(b.x-p.x)`, so it flips
    /// consistently when `p` crosses from the a→b left side to the
    /// right side. Vertical/horizontal lines use the plain coordinate
    /// difference, which avoids `0/0` and instability near-vertical.
    pub fn signed_distance_to(&self, p: Point) -> f64 {
        let magnitude = match self.slant {
            Slant::Vertical => (self.a.x - p.x).abs(),
            Slant::Horizontal => (self.a.y - p.y).abs(),
            Slant::Oblique => {
                (self.slope * p.x - p.y + self.intercept).abs()
                    / (self.slope * self.slope + 1.0).sqrt()
            }
        };
        let direction = sign(
            (self.a.x - p.x) * (self.b.y - p.y) - (self.a.y - p.y) * (self.b.x - p.x),
        );
        direction * magnitude
    }

    /// Intersection point of two lines.
    ///
    /// Returns `(+∞, +∞)` when the slopes are exactly equal (parallel
    /// lines, including two verticals of the same slope sign); callers
    /// that care about coincident lines must check separately. When
    /// exactly one line is vertical the intersection is that line's x
    /// paired with the other line's y at that x.
    pub fn intersection(&self, other: &LinearFunction) -> Point {
        if self.slope == other.slope {
            return Point::new(f64::INFINITY, f64::INFINITY);
        }
        if !self.slope.is_finite() {
            let x = self.eval_inverse(0.0);
            return Point::new(x, other.eval(x));
        }
        if !other.slope.is_finite() {
            let x = other.eval_inverse(0.0);
            return Point::new(x, self.eval(x));
        }
        let x = (other.intercept - self.intercept) / (self.slope - other.slope);
        Point::new(x, self.eval(x))
    }

    /// The line shifted by `offset` along one local axis.
    ///
    /// Horizontal lines shift in y, vertical lines in x. Oblique lines
    /// add `offset` to the intercept - a vertical-axis offset, not a
    /// perpendicular one, matching how boundary edges are nudged along
    /// a single axis at a time.
    pub fn translated(&self, offset: f64) -> LinearFunction {
        let (da, db) = match self.slant {
            Slant::Vertical => (
                Point::new(self.a.x + offset, self.a.y),
                Point::new(self.b.x + offset, self.b.y),
            ),
            Slant::Horizontal | Slant::Oblique => (
                Point::new(self.a.x, self.a.y + offset),
                Point::new(self.b.x, self.b.y + offset),
            ),
        };
        Self::through(da, db)
    }

    /// Reflection of `p` across this line.
    pub fn reflect(&self, p: Point) -> Point {
        match self.slant {
            Slant::Horizontal => Point::new(p.x, 2.0 * self.intercept - p.y),
            Slant::Vertical => Point::new(2.0 * self.a.x - p.x, p.y),
            Slant::Oblique => {
                let k = self.slope;
                let b = self.intercept;
                let d = k * k + 1.0;
                Point::new(
                    ((1.0 - k * k) * p.x + 2.0 * k * p.y - 2.0 * k * b) / d,
                    (2.0 * k * p.x + (k * k - 1.0) * p.y + 2.0 * b) / d,
                )
            }
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
