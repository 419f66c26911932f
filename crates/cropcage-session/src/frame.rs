//! Scene object model.
//!
//! Objects are positioned fabric-style: `left`/`top` name the
//! *unrotated* top-left corner, and rotation turns the object about
//! that corner. An image that has been cropped keeps a `backing` frame
//! describing where the full uncropped source sits behind the visible
//! crop window.

use serde::{Deserialize, Serialize};

use cropcage_core::{Corners, Point};

/// Placement of one rectangular object on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectFrame {
    pub left: f64,
    pub top: f64,
    /// Unscaled extent. For a cropped image this is the crop extent in
    /// source pixels, not the full source extent.
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in degrees, clockwise on screen, about the top-left.
    pub angle: f64,
    /// Source-pixel offset of the crop within the backing image.
    pub crop_x: f64,
    pub crop_y: f64,
    pub opacity: f64,
}

impl Default for ObjectFrame {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            crop_x: 0.0,
            crop_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl ObjectFrame {
    /// Create an unrotated, unscaled frame.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// The object's position (its rotated top-left corner).
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The four corners in canvas space.
    pub fn corners(&self) -> Corners {
        let tl = self.position();
        let w = self.scaled_width();
        let h = self.scaled_height();
        Corners {
            tl,
            tr: Point::new(self.left + w, self.top).rotated_about(tl, self.angle),
            br: Point::new(self.left + w, self.top + h).rotated_about(tl, self.angle),
            bl: Point::new(self.left, self.top + h).rotated_about(tl, self.angle),
        }
    }

    /// Center of the object in canvas space.
    pub fn center_point(&self) -> Point {
        let c = Point::new(
            self.left + self.scaled_width() / 2.0,
            self.top + self.scaled_height() / 2.0,
        );
        c.rotated_about(self.position(), self.angle)
    }

    /// Express a canvas-space point in this object's local frame:
    /// un-rotate about the top-left, then translate the top-left to the
    /// origin.
    pub fn to_local_point(&self, p: Point) -> Point {
        let tl = self.position();
        let r = p.rotated_about(tl, -self.angle);
        Point::new(r.x - tl.x, r.y - tl.y)
    }
}

/// A committed crop region, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub crop_x: f64,
    pub crop_y: f64,
    pub width: f64,
    pub height: f64,
}

/// What kind of object a frame describes. Only images can be cropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Image,
    Shape,
}

/// Interaction restrictions the editor applies to an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLocks {
    pub lock_movement: bool,
    pub lock_skewing: bool,
    pub lock_scaling_flip: bool,
    pub rotation_handle: bool,
    pub edge_handles: bool,
}

impl Default for InteractionLocks {
    fn default() -> Self {
        Self {
            lock_movement: false,
            lock_skewing: false,
            lock_scaling_flip: false,
            rotation_handle: true,
            edge_handles: true,
        }
    }
}

/// One object in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub frame: ObjectFrame,
    /// For cropped images: the frame of the full uncropped source.
    pub backing: Option<ObjectFrame>,
    pub locks: InteractionLocks,
}

impl SceneObject {
    pub fn image(frame: ObjectFrame) -> Self {
        Self {
            kind: ObjectKind::Image,
            frame,
            backing: None,
            locks: InteractionLocks::default(),
        }
    }

    pub fn shape(frame: ObjectFrame) -> Self {
        Self {
            kind: ObjectKind::Shape,
            frame,
            backing: None,
            locks: InteractionLocks::default(),
        }
    }
}
