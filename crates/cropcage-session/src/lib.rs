//! Crop session state machine and scene object model.
//!
//! This crate hosts the stateful half of the cropping engine, on top
//! of the pure geometry in `cropcage-core`:
//!
//! - [`frame`] - fabric-style object frames, interaction locks and the
//!   serializable [`CropRect`] commit surface.
//! - [`session`] - the [`CropSession`] state machine: one crop window,
//!   one dimmed backing overlay, gesture-scoped constraint state, and
//!   the crop-to-source mapping run at every gesture release.
//! - [`sync`] - post-commit replay of canvas gestures onto the
//!   retained backing frame.
//! - [`tool`] - the [`CropTool`] owner that turns precondition errors
//!   into editor-friendly no-ops.
//!
//! # Typical flow
//!
//! Start a session with [`CropTool::start`], route resize/move
//! gestures to the session's `window_*`/`overlay_*` methods, then
//! [`CropTool::commit`] to receive the cropped image and its
//! [`CropRect`], or [`CropTool::cancel`] to restore the original.

pub mod frame;
pub mod session;
pub mod sync;
pub mod tool;

pub use frame::{CropRect, InteractionLocks, ObjectFrame, ObjectKind, SceneObject};
pub use session::{CropSession, SessionError};
pub use sync::{sync_after_move, sync_after_rotate, sync_after_scale, GestureOrigin};
pub use tool::CropTool;
