//! Crop tool entry point.
//!
//! [`CropTool`] owns at most one [`CropSession`] and turns the
//! session's precondition errors into silent no-ops, which is what an
//! editor toolbar wants: clicking "crop" with a shape selected, or
//! twice in a row, simply does nothing.

use crate::frame::{CropRect, SceneObject};
use crate::session::CropSession;

/// Owner of the (at most one) active crop session.
#[derive(Debug, Default)]
pub struct CropTool {
    session: Option<CropSession>,
}

impl CropTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begin cropping `target`. Returns `false` without side effects
    /// when a session is already active or the target is not an image.
    pub fn start(&mut self, target: &SceneObject) -> bool {
        if self.session.is_some() {
            return false;
        }
        match CropSession::begin(target) {
            Ok(session) => {
                self.session = Some(session);
                true
            }
            Err(_) => false,
        }
    }

    /// The active session, for routing gestures.
    pub fn session(&self) -> Option<&CropSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut CropSession> {
        self.session.as_mut()
    }

    /// Abandon the active session, returning the restored pre-session
    /// object. `None` when no session is active.
    pub fn cancel(&mut self) -> Option<SceneObject> {
        self.session.take().map(CropSession::cancel)
    }

    /// Commit the active session, returning the cropped image and its
    /// crop rectangle. `None` when no session is active.
    pub fn commit(&mut self) -> Option<(SceneObject, CropRect)> {
        self.session.take().map(CropSession::commit)
    }
}
