//! Vector primitives shared by the `FaceIt` crates.
//!
//! Everything here lives in screen space: the origin is the top-left
//! corner and Y grows downward.

pub mod error;
pub mod path;
pub mod types;

pub use error::GraphicsError;
pub use path::{Arc, Path, PathCommand};
pub use types::{Color, LineCap, Point, Rect, Scalar, Vec2};
