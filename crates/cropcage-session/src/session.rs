//! Crop session state machine.
//!
//! A [`CropSession`] owns two scene objects for the duration of a crop
//! interaction: the **window** (the visible crop rectangle, initially
//! the image's current frame) and the **overlay** (the full backing
//! image shown dimmed behind it). Gestures on either object run
//! through the constraint solver; releasing a gesture re-derives the
//! crop rectangle in source pixels.
//!
//! Constraint state is captured once per gesture at grab time and is
//! read-only for the gesture's remainder. The session never mutates
//! the caller's scene; `commit`/`cancel` consume the session and hand
//! back the resulting object.

use thiserror::Error;

use cropcage_core::{
    clamp_move, CornerCache, Handle, OrientedBoundary, Point, ScaleClamp, ScaleFloor,
    WindowScaleLimit,
};

use crate::frame::{CropRect, InteractionLocks, ObjectFrame, ObjectKind, SceneObject};

/// Why a crop session could not start.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Crop sessions can only target images.
    #[error("crop sessions can only target images")]
    NotAnImage,
}

/// An active crop interaction on one image.
#[derive(Debug, Clone)]
pub struct CropSession {
    window: SceneObject,
    overlay: SceneObject,
    backup: SceneObject,
    boundary: Option<OrientedBoundary>,
    corner_cache: Option<CornerCache>,
    window_limit: WindowScaleLimit,
    overlay_clamp: Option<ScaleClamp>,
}

impl CropSession {
    /// Start cropping `target`.
    ///
    /// The overlay takes the image's retained backing frame when one
    /// exists, so a previously cropped image re-opens with its full
    /// source bounds; an uncropped image uses the live frame. The
    /// original object is snapshotted for [`CropSession::cancel`].
    pub fn begin(target: &SceneObject) -> Result<Self, SessionError> {
        if target.kind != ObjectKind::Image {
            return Err(SessionError::NotAnImage);
        }

        let mut overlay_frame = target.backing.unwrap_or(target.frame);
        overlay_frame.opacity = 0.6;

        let overlay = SceneObject {
            kind: ObjectKind::Image,
            frame: overlay_frame,
            backing: None,
            locks: InteractionLocks {
                lock_movement: false,
                lock_skewing: true,
                lock_scaling_flip: true,
                rotation_handle: false,
                edge_handles: false,
            },
        };

        let window = SceneObject {
            kind: ObjectKind::Image,
            frame: target.frame,
            backing: None,
            locks: InteractionLocks {
                lock_movement: true,
                lock_skewing: true,
                lock_scaling_flip: true,
                rotation_handle: false,
                edge_handles: true,
            },
        };

        Ok(Self {
            window,
            overlay,
            backup: target.clone(),
            boundary: None,
            corner_cache: None,
            window_limit: WindowScaleLimit::default(),
            overlay_clamp: None,
        })
    }

    /// The crop window in its current state.
    pub fn window(&self) -> &SceneObject {
        &self.window
    }

    /// The dimmed backing image in its current state.
    pub fn overlay(&self) -> &SceneObject {
        &self.overlay
    }

    // ------------------------------------------------------------------
    // Window gestures (resizing the crop rectangle)
    // ------------------------------------------------------------------

    /// A window resize handle was grabbed: capture the growth limit.
    pub fn window_grab(&mut self, handle: Handle) {
        let base_width = self.window.frame.width * self.overlay.frame.scale_x;
        let base_height = self.window.frame.height * self.overlay.frame.scale_y;
        self.window_limit = WindowScaleLimit::at_gesture_start(
            &self.window.frame.corners(),
            &self.overlay.frame.corners(),
            base_width,
            base_height,
            handle,
        );
    }

    /// Apply one window resize update. The candidate's scales are
    /// clamped against the captured limit; its position and the rest
    /// of the frame are applied as-is. Returns the applied frame.
    pub fn window_scale(&mut self, candidate: ObjectFrame) -> ObjectFrame {
        let (scale_x, scale_y) = self.window_limit.clamp(
            candidate.scale_x,
            candidate.scale_y,
            self.window.frame.width,
            self.window.frame.height,
        );
        let mut frame = candidate;
        frame.scale_x = scale_x;
        frame.scale_y = scale_y;
        self.window.frame = frame;
        frame
    }

    /// A window resize gesture ended: bake the crop.
    pub fn window_release(&mut self) -> CropRect {
        self.window_limit = WindowScaleLimit::default();
        self.calculate_crop()
    }

    // ------------------------------------------------------------------
    // Overlay gestures (repositioning/resizing the backing image)
    // ------------------------------------------------------------------

    /// The overlay was grabbed. `Some(handle)` starts a scale gesture
    /// and captures the shrink floor; `None` starts a move gesture and
    /// derives the oriented move boundary plus its corner cache, once.
    pub fn overlay_grab(&mut self, handle: Option<Handle>) {
        match handle {
            Some(handle) => {
                let floor = ScaleFloor::at_gesture_start(
                    &self.window.frame.corners(),
                    &self.overlay.frame.corners(),
                    self.overlay.frame.width,
                    self.overlay.frame.height,
                    handle,
                );
                self.overlay_clamp = Some(ScaleClamp::new(
                    floor,
                    self.overlay.frame.scale_x,
                    self.overlay.frame.scale_y,
                ));
                self.boundary = None;
                self.corner_cache = None;
            }
            None => {
                let boundary = OrientedBoundary::for_move(
                    &self.window.frame.corners(),
                    &self.overlay.frame.corners(),
                    self.window.frame.angle,
                );
                self.corner_cache = Some(boundary.corner_cache());
                self.boundary = Some(boundary);
                self.overlay_clamp = None;
            }
        }
    }

    /// Apply one overlay resize update through the shrink floor.
    /// Returns the applied frame.
    pub fn overlay_scale(&mut self, candidate: ObjectFrame) -> ObjectFrame {
        let mut frame = candidate;
        if let Some(clamp) = self.overlay_clamp.as_mut() {
            let (scale_x, scale_y) = clamp.apply(candidate.scale_x, candidate.scale_y);
            frame.scale_x = scale_x;
            frame.scale_y = scale_y;
        }
        self.overlay.frame = frame;
        frame
    }

    /// Apply one overlay move update through the oriented-boundary
    /// clamp. Returns the applied position.
    pub fn overlay_move(&mut self, candidate: Point) -> Point {
        let clamped = match (&self.boundary, &self.corner_cache) {
            (Some(boundary), Some(cache)) => clamp_move(boundary, cache, candidate),
            _ => candidate,
        };
        self.overlay.frame.left = clamped.x;
        self.overlay.frame.top = clamped.y;
        clamped
    }

    /// An overlay gesture ended: bake the crop.
    pub fn overlay_release(&mut self) -> CropRect {
        self.boundary = None;
        self.corner_cache = None;
        self.overlay_clamp = None;
        self.calculate_crop()
    }

    // ------------------------------------------------------------------
    // Outcomes
    // ------------------------------------------------------------------

    /// Abandon the session and restore the pre-session object,
    /// unconditionally, even mid-gesture.
    pub fn cancel(self) -> SceneObject {
        self.backup
    }

    /// Bake the crop and end the session.
    ///
    /// Returns the cropped image (its frame is the final crop window,
    /// its `backing` the final overlay frame at full opacity) and the
    /// crop rectangle in source pixels.
    pub fn commit(mut self) -> (SceneObject, CropRect) {
        let crop = self.calculate_crop();
        let mut backing = self.overlay.frame;
        backing.opacity = 1.0;

        let mut image = self.window;
        image.backing = Some(backing);
        image.locks = InteractionLocks::default();
        (image, crop)
    }

    /// Map the window back into the overlay's source pixels and bake
    /// the result into the window frame. Idempotent: re-running with
    /// no intervening gesture reproduces the same rectangle.
    fn calculate_crop(&mut self) -> CropRect {
        let image_scale_x = self.overlay.frame.scale_x;
        let image_scale_y = self.overlay.frame.scale_y;

        let local = self
            .window
            .frame
            .to_local_point(self.overlay.frame.position());

        let crop = CropRect {
            crop_x: local.x.abs() / image_scale_x,
            crop_y: local.y.abs() / image_scale_y,
            width: self.window.frame.scaled_width() / image_scale_x,
            height: self.window.frame.scaled_height() / image_scale_y,
        };

        let frame = &mut self.window.frame;
        frame.width = crop.width;
        frame.height = crop.height;
        frame.crop_x = crop.crop_x;
        frame.crop_y = crop.crop_y;
        frame.scale_x = image_scale_x;
        frame.scale_y = image_scale_y;
        frame.opacity = 1.0;
        crop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_400() -> SceneObject {
        SceneObject::image(ObjectFrame::new(400.0, 100.0, 400.0, 400.0))
    }

    #[test]
    fn test_begin_rejects_non_images() {
        let shape = SceneObject::shape(ObjectFrame::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(CropSession::begin(&shape).unwrap_err(), SessionError::NotAnImage);
    }

    #[test]
    fn test_begin_dims_overlay_and_locks_objects() {
        let session = CropSession::begin(&image_400()).unwrap();
        assert_eq!(session.overlay().frame.opacity, 0.6);
        assert!(!session.overlay().locks.edge_handles);
        assert!(!session.overlay().locks.rotation_handle);
        assert!(session.window().locks.lock_movement);
        assert!(session.window().locks.edge_handles);
        assert!(!session.window().locks.rotation_handle);
    }

    #[test]
    fn test_begin_reuses_backing_frame() {
        let mut image = image_400();
        let mut backing = ObjectFrame::new(300.0, 50.0, 800.0, 800.0);
        backing.scale_x = 0.5;
        backing.scale_y = 0.5;
        image.backing = Some(backing);

        let session = CropSession::begin(&image).unwrap();
        assert_eq!(session.overlay().frame.width, 800.0);
        assert_eq!(session.overlay().frame.left, 300.0);
        assert_eq!(session.overlay().frame.scale_x, 0.5);
    }

    #[test]
    fn test_window_shrink_then_move_produces_crop() {
        let mut session = CropSession::begin(&image_400()).unwrap();

        // Shrink the window to its top-left quarter.
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 0.5;
        candidate.scale_y = 0.5;
        session.window_scale(candidate);
        let crop = session.window_release();
        assert_eq!(
            crop,
            CropRect {
                crop_x: 0.0,
                crop_y: 0.0,
                width: 200.0,
                height: 200.0
            }
        );
        assert_eq!(session.window().frame.width, 200.0);
        assert_eq!(session.window().frame.scale_x, 1.0);

        // Slide the backing image up-left so the crop lands mid-image.
        session.overlay_grab(None);
        let applied = session.overlay_move(Point::new(300.0, 50.0));
        assert_eq!(applied, Point::new(300.0, 50.0));
        let crop = session.overlay_release();
        assert_eq!(
            crop,
            CropRect {
                crop_x: 100.0,
                crop_y: 50.0,
                width: 200.0,
                height: 200.0
            }
        );
    }

    #[test]
    fn test_overlay_move_is_clamped_to_boundary() {
        let mut session = CropSession::begin(&image_400()).unwrap();
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 0.5;
        candidate.scale_y = 0.5;
        session.window_scale(candidate);
        session.window_release();

        // Window spans [400,600]x[100,300]; a 400x400 overlay may sit
        // anywhere in left [200,400], top [-100,100].
        session.overlay_grab(None);
        assert_eq!(
            session.overlay_move(Point::new(250.0, 0.0)),
            Point::new(250.0, 0.0)
        );
        // Both axes overshoot toward bottom-right: snap to that corner.
        assert_eq!(
            session.overlay_move(Point::new(420.0, 120.0)),
            Point::new(400.0, 100.0)
        );
    }

    #[test]
    fn test_window_growth_stops_at_overlay_edge() {
        let mut image = image_400();
        // Previously cropped: 200x200 window into a 400x400 source
        // whose top-left sits 100px up-left of the window.
        image.frame = ObjectFrame {
            crop_x: 100.0,
            crop_y: 100.0,
            ..ObjectFrame::new(400.0, 100.0, 200.0, 200.0)
        };
        image.backing = Some(ObjectFrame::new(300.0, 0.0, 400.0, 400.0));

        let mut session = CropSession::begin(&image).unwrap();
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 3.0;
        candidate.scale_y = 3.0;
        let applied = session.window_scale(candidate);
        // 100px of slack on each axis: scaled extent caps at 300.
        assert!((applied.scale_x - 1.5).abs() < 1e-12);
        assert!((applied.scale_y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_overlay_shrink_freezes_at_floor() {
        let mut image = image_400();
        image.frame = ObjectFrame {
            crop_x: 0.0,
            crop_y: 0.0,
            ..ObjectFrame::new(400.0, 100.0, 200.0, 200.0)
        };
        image.backing = Some(ObjectFrame::new(400.0, 100.0, 400.0, 400.0));

        let mut session = CropSession::begin(&image).unwrap();
        session.overlay_grab(Some(Handle::BottomRight));
        let mut candidate = session.overlay().frame;
        candidate.scale_x = 0.25;
        candidate.scale_y = 0.8;
        let applied = session.overlay_scale(candidate);
        // The window's right edge is 200px from the overlay's left
        // edge: min_x = 0.5. X pins; Y reverts to the last accepted
        // value, which is still the gesture-start 1.0.
        assert_eq!(applied.scale_x, 0.5);
        assert_eq!(applied.scale_y, 1.0);
    }

    #[test]
    fn test_commit_retains_backing_and_unlocks() {
        let mut session = CropSession::begin(&image_400()).unwrap();
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 0.5;
        candidate.scale_y = 0.5;
        session.window_scale(candidate);
        session.window_release();
        session.overlay_grab(None);
        session.overlay_move(Point::new(300.0, 50.0));
        session.overlay_release();

        let (image, crop) = session.commit();
        assert_eq!(crop.crop_x, 100.0);
        assert_eq!(crop.crop_y, 50.0);
        assert_eq!(image.frame.width, 200.0);
        assert_eq!(image.frame.crop_x, 100.0);
        assert_eq!(image.frame.opacity, 1.0);
        assert_eq!(image.locks, InteractionLocks::default());

        let backing = image.backing.unwrap();
        assert_eq!(backing.left, 300.0);
        assert_eq!(backing.top, 50.0);
        assert_eq!(backing.width, 400.0);
        assert_eq!(backing.opacity, 1.0);
    }

    #[test]
    fn test_recrop_round_trip_never_shrinks_backing() {
        let mut session = CropSession::begin(&image_400()).unwrap();
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 0.25;
        candidate.scale_y = 0.25;
        session.window_scale(candidate);
        session.window_release();
        let (image, _) = session.commit();
        assert_eq!(image.frame.width, 100.0);

        // Re-entering crop mode exposes the full 400x400 source again.
        let session = CropSession::begin(&image).unwrap();
        assert_eq!(session.overlay().frame.width, 400.0);
        assert_eq!(session.overlay().frame.height, 400.0);
    }

    #[test]
    fn test_cancel_restores_backup_mid_gesture() {
        let original = image_400();
        let mut session = CropSession::begin(&original).unwrap();
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 0.5;
        candidate.scale_y = 0.5;
        session.window_scale(candidate);
        // No release: cancel mid-gesture still restores everything.
        assert_eq!(session.cancel(), original);
    }

    #[test]
    fn test_calculate_crop_is_idempotent() {
        let mut session = CropSession::begin(&image_400()).unwrap();
        session.window_grab(Handle::BottomRight);
        let mut candidate = session.window().frame;
        candidate.scale_x = 0.5;
        candidate.scale_y = 0.5;
        session.window_scale(candidate);
        let first = session.window_release();
        let second = session.calculate_crop();
        assert_eq!(first, second);
        assert_eq!(session.window().frame.width, 200.0);
    }
}
