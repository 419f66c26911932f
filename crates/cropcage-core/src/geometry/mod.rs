//! Line algebra primitives: points and linear functions.
//!
//! These types underpin every other part of the engine. The central
//! design decision (inherited from the reference behavior this engine
//! reproduces) is that vertical and horizontal lines are not errors
//! but first-class degenerate encodings: evaluation on the axis a line
//! cannot answer returns a signed sentinel infinity rather than
//! panicking or returning `NaN`.

mod line;
mod point;

pub use line::LinearFunction;
pub use point::Point;
