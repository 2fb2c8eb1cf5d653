//! Stylized face geometry.
//!
//! [`geometry::render`] maps a bounding [`Rect`](faceit_graphics::Rect) and
//! a [`FaceParameters`] to a [`PathSet`]: skull, left eye, right eye and
//! mouth, ready to be stroked by any vector backend. The function is pure;
//! all geometry is re-derived from its two inputs on every call.

pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod ratios;

pub use config::FaceConfig;
pub use error::{ConfigError, FaceError};
pub use geometry::{Feature, PathSet, StrokedPath, render};
pub use params::{Eye, FaceParameters};
