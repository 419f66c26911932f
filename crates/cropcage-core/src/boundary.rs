//! Oriented-boundary extraction for rotated rectangles.
//!
//! During a crop the backing image (the "overlay") is dragged beneath
//! a fixed crop window. The overlay's position point must stay inside
//! a parallelogram-shaped region so that the overlay always covers the
//! window. This module derives that region as four logical boundary
//! lines - left/top/right/bottom - assigned independently of the
//! current rotation angle: `left`/`right` always bound the position's
//! horizontal extent and `top`/`bottom` its vertical extent.
//!
//! The role assignment buckets the normalized angle into 90°
//! quadrants. At exact multiples of 90° the lines are produced by a
//! pure axis lookup over corner coordinates, which sidesteps the
//! degenerate-slope intersection math entirely.

use serde::{Deserialize, Serialize};

use crate::geometry::{LinearFunction, Point};

/// The four corner coordinates of a (possibly rotated) rectangular
/// object in canvas space.
///
/// Corner names refer to the object's own unrotated frame: `tl` is the
/// corner at the object's origin regardless of where rotation put it
/// on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub tl: Point,
    pub tr: Point,
    pub br: Point,
    pub bl: Point,
}

/// The four raw edge lines of a rectangle, named by the object's own
/// unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLines {
    pub left: LinearFunction,
    pub top: LinearFunction,
    pub right: LinearFunction,
    pub bottom: LinearFunction,
}

impl Corners {
    /// Raw boundary lines from the corners.
    ///
    /// Endpoint order is fixed (left: bl→tl, top: tl→tr, right: tr→br,
    /// bottom: br→bl) so that signed distances keep a consistent
    /// orientation around the rectangle.
    pub fn edges(&self) -> EdgeLines {
        EdgeLines {
            left: LinearFunction::through(self.bl, self.tl),
            top: LinearFunction::through(self.tl, self.tr),
            right: LinearFunction::through(self.tr, self.br),
            bottom: LinearFunction::through(self.br, self.bl),
        }
    }

    /// Scaled extent along the object's local x axis.
    pub fn width(&self) -> f64 {
        self.tl.distance_to(self.tr)
    }

    /// Scaled extent along the object's local y axis.
    pub fn height(&self) -> f64 {
        self.tl.distance_to(self.bl)
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    angle_degrees.rem_euclid(360.0)
}

/// The four logical boundary lines of the move-constraint region,
/// role-assigned independent of rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBoundary {
    pub left: LinearFunction,
    pub top: LinearFunction,
    pub right: LinearFunction,
    pub bottom: LinearFunction,
}

/// Exact intersection points of the oriented boundary, cached at
/// gesture start and used as snap targets on corner overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerCache {
    pub tl: Point,
    pub tr: Point,
    pub br: Point,
    pub bl: Point,
}

impl OrientedBoundary {
    /// Derive the boundary constraining the overlay's position point
    /// while it is dragged beneath the crop window.
    ///
    /// `window` is the crop window's corners, `overlay` the backing
    /// image's corners, and `angle_degrees` their shared rotation
    /// angle (any sign or magnitude).
    pub fn for_move(window: &Corners, overlay: &Corners, angle_degrees: f64) -> Self {
        let angle = normalize_angle(angle_degrees);
        // Exact multiples of 90 degrees reduce to coordinate lookups;
        // running them through the quadrant table would mean
        // intersecting degenerate slopes.
        if angle % 90.0 == 0.0 {
            return Self::axis_aligned(window, overlay, angle);
        }

        let win = window.edges();
        let ov = overlay.edges();

        // Translate the overlay's own left/top edges to where they sit
        // when the overlay is pushed fully to the window's far side.
        // Vertical edges have no usable intercept and shift in x.
        let v_offset = if ov.left.slope().is_finite() {
            win.right.intercept() - ov.right.intercept()
        } else {
            window.br.x - overlay.br.x
        };
        let h_offset = if ov.top.slope().is_finite() {
            win.bottom.intercept() - ov.bottom.intercept()
        } else {
            window.br.x - overlay.br.x
        };
        let v = ov.left.translated(v_offset);
        let h = ov.top.translated(h_offset);

        // Per-quadrant role reassignment: which geometric edge plays
        // which logical role cycles as the rectangle rotates through
        // the four buckets.
        if angle < 90.0 {
            Self {
                left: v,
                top: h,
                right: win.left,
                bottom: win.top,
            }
        } else if angle < 180.0 {
            Self {
                left: win.top,
                top: v,
                right: h,
                bottom: win.left,
            }
        } else if angle < 270.0 {
            Self {
                left: win.left,
                top: win.top,
                right: v,
                bottom: h,
            }
        } else {
            Self {
                left: h,
                top: win.left,
                right: win.top,
                bottom: v,
            }
        }
    }

    /// Axis-aligned fast path: at 0/90/180/270 the boundary is four
    /// axis-parallel lines read directly off the corner coordinates
    /// and the overlay's scaled extents.
    fn axis_aligned(window: &Corners, overlay: &Corners, angle: f64) -> Self {
        let w = overlay.width();
        let h = overlay.height();
        let (min_l, max_l, min_t, max_t) = if angle == 0.0 {
            (
                window.br.x - w,
                window.tl.x,
                window.br.y - h,
                window.tl.y,
            )
        } else if angle == 90.0 {
            (
                window.tl.x,
                window.br.x + h,
                window.br.y - w,
                window.tl.y,
            )
        } else if angle == 180.0 {
            (
                window.tl.x,
                window.br.x + w,
                window.tl.y,
                window.br.y + h,
            )
        } else {
            (
                window.br.x - h,
                window.tl.x,
                window.tl.y,
                window.br.y + w,
            )
        };
        Self {
            left: LinearFunction::vertical(min_l),
            top: LinearFunction::horizontal(min_t),
            right: LinearFunction::vertical(max_l),
            bottom: LinearFunction::horizontal(max_t),
        }
    }

    /// Intersect the boundary lines into the four exact corner points.
    pub fn corner_cache(&self) -> CornerCache {
        CornerCache {
            tl: self.top.intersection(&self.left),
            tr: self.top.intersection(&self.right),
            br: self.bottom.intersection(&self.right),
            bl: self.bottom.intersection(&self.left),
        }
    }
}
