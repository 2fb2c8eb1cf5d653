//! Fixed proportions relating every facial feature to the skull radius.
//!
//! Each constant is a divisor: e.g. the eye radius is
//! `skull_radius / SKULL_RADIUS_TO_EYE_RADIUS`.

use faceit_graphics::types::Scalar;

/// Horizontal and vertical distance from the skull center to each eye.
pub const SKULL_RADIUS_TO_EYE_OFFSET: Scalar = 3.0;
pub const SKULL_RADIUS_TO_EYE_RADIUS: Scalar = 10.0;
pub const SKULL_RADIUS_TO_MOUTH_WIDTH: Scalar = 1.0;
pub const SKULL_RADIUS_TO_MOUTH_HEIGHT: Scalar = 3.0;
/// Distance from the skull center down to the top of the mouth box.
pub const SKULL_RADIUS_TO_MOUTH_OFFSET: Scalar = 3.0;
