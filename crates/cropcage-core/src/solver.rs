//! Crop constraint solving.
//!
//! Two independent constraint problems keep the crop interaction
//! inside the image's oriented bounding box:
//!
//! 1. **Scale clamps** - captured once at gesture start, per active
//!    control handle: the crop window may not grow past the backing
//!    image's edges, and the backing image may not shrink past the
//!    crop window.
//! 2. **Move clamp** - applied on every movement update: the dragged
//!    object's position is clamped to the oriented boundary, with an
//!    explicit corner-overshoot fallback that snaps to the exact
//!    cached corner point instead of clamping each axis independently
//!    (which would cut the corner visually on diagonal drags).

use serde::{Deserialize, Serialize};

use crate::boundary::{CornerCache, Corners, OrientedBoundary};
use crate::geometry::Point;

/// The eight resize control handles of a rectangular object.
///
/// Movement is not a handle: a move gesture carries no handle at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

/// Maximum scaled extent the crop window may reach before crossing the
/// backing image's far edge, captured when a window handle is grabbed.
///
/// Axes the active handle does not drive stay unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowScaleLimit {
    max_scaled_width: f64,
    max_scaled_height: f64,
}

impl Default for WindowScaleLimit {
    fn default() -> Self {
        Self {
            max_scaled_width: f64::INFINITY,
            max_scaled_height: f64::INFINITY,
        }
    }
}

impl WindowScaleLimit {
    /// Capture the limit for one gesture.
    ///
    /// `base_width`/`base_height` are the window's current extent at
    /// the backing image's scale (`window.width * image_scale_x`,
    /// `window.height * image_scale_y`). The available slack per side
    /// is the distance from the backing image's corner to the window
    /// edge the handle drags.
    pub fn at_gesture_start(
        window: &Corners,
        overlay: &Corners,
        base_width: f64,
        base_height: f64,
        handle: Handle,
    ) -> Self {
        let win = window.edges();
        let left_d = win.left.signed_distance_to(overlay.tl).abs();
        let top_d = win.top.signed_distance_to(overlay.tl).abs();
        let right_d = win.right.signed_distance_to(overlay.tr).abs();
        let bottom_d = win.bottom.signed_distance_to(overlay.br).abs();

        let mut limit = Self::default();
        match handle {
            Handle::Left => limit.max_scaled_width = base_width + left_d,
            Handle::Right => limit.max_scaled_width = base_width + right_d,
            Handle::Top => limit.max_scaled_height = base_height + top_d,
            Handle::Bottom => limit.max_scaled_height = base_height + bottom_d,
            Handle::TopLeft => {
                limit.max_scaled_width = base_width + left_d;
                limit.max_scaled_height = base_height + top_d;
            }
            Handle::TopRight => {
                limit.max_scaled_width = base_width + right_d;
                limit.max_scaled_height = base_height + top_d;
            }
            Handle::BottomRight => {
                limit.max_scaled_width = base_width + right_d;
                limit.max_scaled_height = base_height + bottom_d;
            }
            Handle::BottomLeft => {
                limit.max_scaled_width = base_width + left_d;
                limit.max_scaled_height = base_height + bottom_d;
            }
        }
        limit
    }

    /// Clamp a candidate scale pair against the captured limit.
    ///
    /// `base_width`/`base_height` are the window's unscaled extent.
    pub fn clamp(&self, scale_x: f64, scale_y: f64, base_width: f64, base_height: f64) -> (f64, f64) {
        (
            scale_x.min(self.max_scaled_width / base_width),
            scale_y.min(self.max_scaled_height / base_height),
        )
    }
}

/// Per-axis minimum scale for the backing image, captured when one of
/// its handles is grabbed: shrinking past the floor would pull the
/// image edge inside the crop window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleFloor {
    pub min_x: f64,
    pub min_y: f64,
}

impl ScaleFloor {
    /// Capture the floor for one gesture.
    ///
    /// Each driven axis needs at least the distance from the window
    /// corner being held against to the backing image's *opposite*
    /// edge, divided by the image's unscaled extent.
    pub fn at_gesture_start(
        window: &Corners,
        overlay: &Corners,
        base_width: f64,
        base_height: f64,
        handle: Handle,
    ) -> Self {
        let ov = overlay.edges();
        let x_from_left = ov.right.signed_distance_to(window.tl).abs() / base_width;
        let x_from_right = ov.left.signed_distance_to(window.tr).abs() / base_width;
        let y_from_top = ov.bottom.signed_distance_to(window.tl).abs() / base_height;
        let y_from_bottom = ov.top.signed_distance_to(window.bl).abs() / base_height;

        let mut floor = Self::default();
        match handle {
            Handle::Left => floor.min_x = x_from_left,
            Handle::Right => floor.min_x = x_from_right,
            Handle::Top => floor.min_y = y_from_top,
            Handle::Bottom => floor.min_y = y_from_bottom,
            Handle::TopLeft => {
                floor.min_x = x_from_left;
                floor.min_y = y_from_top;
            }
            Handle::TopRight => {
                floor.min_x = x_from_right;
                floor.min_y = y_from_top;
            }
            Handle::BottomRight => {
                floor.min_x = x_from_right;
                floor.min_y = y_from_bottom;
            }
            Handle::BottomLeft => {
                floor.min_x = x_from_left;
                floor.min_y = y_from_bottom;
            }
        }
        floor
    }
}

/// Stateful floor enforcement for one scale gesture.
///
/// The floor is per-axis: when a candidate pushes an axis below its
/// minimum, that axis holds at the minimum and the *other* axis is
/// frozen at its last accepted value rather than following the
/// candidate. The two branches run in a fixed order (x first), which
/// is part of the observable behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleClamp {
    min_x: f64,
    min_y: f64,
    last_x: f64,
    last_y: f64,
}

impl ScaleClamp {
    /// Start a gesture from the captured floor and the object's
    /// current scale.
    pub fn new(floor: ScaleFloor, current_x: f64, current_y: f64) -> Self {
        Self {
            min_x: floor.min_x,
            min_y: floor.min_y,
            last_x: current_x,
            last_y: current_y,
        }
    }

    /// Clamp one scale update, recording accepted values.
    pub fn apply(&mut self, scale_x: f64, scale_y: f64) -> (f64, f64) {
        let mut sx = scale_x;
        let mut sy = scale_y;

        if sx < self.min_x {
            sx = self.min_x;
            sy = self.last_y;
        } else {
            self.last_y = sy;
        }

        if sy < self.min_y {
            sy = self.min_y;
            sx = self.last_x;
        } else {
            self.last_x = sx;
        }

        (sx, sy)
    }
}

/// Clamp a candidate position against the oriented boundary.
///
/// Axis ranges are evaluated at the candidate point, so oblique
/// boundaries give per-position limits. When both axes overshoot, the
/// result snaps to the cached exact corner; clamping each axis
/// independently would land off the boundary corner whenever the
/// boundary is rotated.
pub fn clamp_move(boundary: &OrientedBoundary, corners: &CornerCache, candidate: Point) -> Point {
    let min_l = boundary.left.eval_inverse(candidate.y);
    let max_l = boundary.right.eval_inverse(candidate.y);
    let min_t = boundary.top.eval(candidate.x);
    let max_t = boundary.bottom.eval(candidate.x);

    let left = candidate.x;
    let top = candidate.y;

    if left < min_l {
        if top < min_t {
            corners.tl
        } else if top > max_t {
            corners.bl
        } else {
            Point::new(min_l, top)
        }
    } else if left > max_l {
        if top > max_t {
            corners.br
        } else if top < min_t {
            corners.tr
        } else {
            Point::new(max_l, top)
        }
    } else if top < min_t {
        Point::new(left, min_t)
    } else if top > max_t {
        Point::new(left, max_t)
    } else {
        candidate
    }
}
