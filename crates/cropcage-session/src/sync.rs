//! Post-commit backing synchronization.
//!
//! After a crop is committed, the image keeps a `backing` frame
//! recording where its full source sits. Ordinary canvas gestures
//! (move, rotate, scale) manipulate only the visible image frame, so
//! the backing would drift out of register and the next crop session
//! would open on stale bounds. These functions replay each gesture
//! onto the backing frame.
//!
//! All three are no-ops for objects without a backing frame.

use cropcage_core::Point;

use crate::frame::{ObjectFrame, SceneObject};

/// Frame placement captured when a canvas gesture starts, used to
/// derive the gesture's delta at release time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOrigin {
    pub left: f64,
    pub top: f64,
    pub angle: f64,
}

impl GestureOrigin {
    pub fn capture(frame: &ObjectFrame) -> Self {
        Self {
            left: frame.left,
            top: frame.top,
            angle: frame.angle,
        }
    }
}

/// Replay a completed move gesture: shift the backing by the same
/// translation the image received.
pub fn sync_after_move(image: &mut SceneObject, origin: GestureOrigin) {
    if let Some(backing) = image.backing.as_mut() {
        backing.left += image.frame.left - origin.left;
        backing.top += image.frame.top - origin.top;
    }
}

/// Replay a completed rotate gesture: rotate the backing's position
/// about the image center by the angle delta and copy the new angle.
///
/// Rotate gestures pivot on the image center, so the center read from
/// the post-gesture frame is the same pivot the gesture used.
pub fn sync_after_rotate(image: &mut SceneObject, origin: GestureOrigin) {
    let delta = image.frame.angle - origin.angle;
    let center = image.frame.center_point();
    if let Some(backing) = image.backing.as_mut() {
        let pos = backing.position().rotated_about(center, delta);
        backing.left = pos.x;
        backing.top = pos.y;
        backing.angle = image.frame.angle;
    }
}

/// Replay a completed scale gesture: re-derive the backing position
/// from the image's new top-left, its crop offsets and its scales,
/// then copy the scales.
///
/// The backing's top-left must sit at the image's top-left displaced
/// by the scaled crop offset, rotated into the image's orientation.
pub fn sync_after_scale(image: &mut SceneObject) {
    let frame = image.frame;
    if let Some(backing) = image.backing.as_mut() {
        let tl = frame.position();
        let (sin, cos) = frame.angle.to_radians().sin_cos();

        let x1 = tl.x - sin * frame.crop_y * frame.scale_y;
        let y1 = tl.y + cos * frame.crop_y * frame.scale_y;
        let x2 = tl.x + cos * frame.crop_x * frame.scale_x;
        let y2 = tl.y + sin * frame.crop_x * frame.scale_x;
        let x3 = x1 + (x2 - tl.x);
        let y3 = y1 + (y2 - tl.y);

        backing.left = tl.x - (x3 - tl.x);
        backing.top = tl.y - (y3 - tl.y);
        backing.scale_x = frame.scale_x;
        backing.scale_y = frame.scale_y;
    }
}


// ======================================================================
// Property-Based Tests
// ======================================================================
