//! Cropcage Core - oriented-boundary crop geometry
//!
//! This crate provides the computational-geometry engine behind the
//! Cropcage image-cropping overlay: line algebra with explicit
//! degenerate (vertical/horizontal) encodings, rotation-invariant
//! boundary extraction for rotated rectangles, and the constraint
//! solver that keeps a crop window locked inside an image's oriented
//! bounding box.
//!
//! Everything here is pure: no rendering, no I/O, no session state.
//! The session layer lives in `cropcage-session`.

pub mod boundary;
pub mod geometry;
pub mod solver;

pub use boundary::{normalize_angle, CornerCache, Corners, EdgeLines, OrientedBoundary};
pub use geometry::{LinearFunction, Point};
pub use solver::{clamp_move, Handle, ScaleClamp, ScaleFloor, WindowScaleLimit};
