//! Caller-supplied face parameters.

use faceit_graphics::types::{Color, Scalar};

use crate::error::FaceError;

/// Which eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// Horizontal direction from the skull center: -1 for left, +1 for right.
    pub const fn sign(self) -> Scalar {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Everything about a face except where it is drawn.
///
/// Constructed by the caller and passed by value to
/// [`render`](crate::geometry::render). Only `line_width` has a contract
/// ([`validate`](Self::validate)); `mouth_curvature` is clamped to
/// [-1, 1] at render time and `scale` is used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceParameters {
    /// Skull radius as a fraction of half the shorter bounds side.
    pub scale: Scalar,
    pub eyes_open: bool,
    /// 1.0 is a full smile, -1.0 a full frown, 0.0 a straight mouth.
    pub mouth_curvature: Scalar,
    /// Stroke width for the eyes and mouth.
    pub line_width: Scalar,
    pub color: Color,
}

impl FaceParameters {
    pub const DEFAULT_SCALE: Scalar = 0.9;
    pub const DEFAULT_MOUTH_CURVATURE: Scalar = 0.5;
    pub const DEFAULT_LINE_WIDTH: Scalar = 5.0;
    pub const DEFAULT_COLOR: Color = Color::BLUE;

    #[must_use]
    pub const fn with_scale(mut self, scale: Scalar) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_eyes_open(mut self, eyes_open: bool) -> Self {
        self.eyes_open = eyes_open;
        self
    }

    #[must_use]
    pub const fn with_mouth_curvature(mut self, mouth_curvature: Scalar) -> Self {
        self.mouth_curvature = mouth_curvature;
        self
    }

    #[must_use]
    pub const fn with_line_width(mut self, line_width: Scalar) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check the caller contract: `line_width` must be finite and >= 0.
    ///
    /// # Errors
    ///
    /// Returns [`FaceError::InvalidLineWidth`] otherwise.
    pub fn validate(&self) -> Result<(), FaceError> {
        if self.line_width.is_finite() && self.line_width >= 0.0 {
            Ok(())
        } else {
            Err(FaceError::InvalidLineWidth(self.line_width))
        }
    }

    /// [`validate`](Self::validate), passing `self` through on success.
    ///
    /// # Errors
    ///
    /// Returns [`FaceError::InvalidLineWidth`] for a negative or non-finite
    /// line width.
    pub fn validated(self) -> Result<Self, FaceError> {
        self.validate().map(|()| self)
    }
}

impl Default for FaceParameters {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            eyes_open: true,
            mouth_curvature: Self::DEFAULT_MOUTH_CURVATURE,
            line_width: Self::DEFAULT_LINE_WIDTH,
            color: Self::DEFAULT_COLOR,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = FaceParameters::default();
        assert_eq!(p.scale, 0.9);
        assert!(p.eyes_open);
        assert_eq!(p.mouth_curvature, 0.5);
        assert_eq!(p.line_width, 5.0);
        assert_eq!(p.color, Color::BLUE);
    }

    #[test]
    fn builders_replace_single_fields() {
        let p = FaceParameters::default()
            .with_eyes_open(false)
            .with_mouth_curvature(-0.25)
            .with_color(Color::RED);
        assert!(!p.eyes_open);
        assert_eq!(p.mouth_curvature, -0.25);
        assert_eq!(p.color, Color::RED);
        assert_eq!(p.scale, FaceParameters::DEFAULT_SCALE);
    }

    #[test]
    fn zero_line_width_is_valid() {
        assert!(FaceParameters::default().with_line_width(0.0).validate().is_ok());
    }

    #[test]
    fn negative_line_width_is_reported() {
        let err = FaceParameters::default()
            .with_line_width(-1.0)
            .validated()
            .unwrap_err();
        assert_eq!(err, FaceError::InvalidLineWidth(-1.0));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn non_finite_line_width_is_reported() {
        for w in [Scalar::NAN, Scalar::INFINITY] {
            assert!(FaceParameters::default().with_line_width(w).validate().is_err());
        }
    }

    #[test]
    fn out_of_range_scale_and_curvature_are_accepted() {
        let p = FaceParameters::default()
            .with_scale(3.0)
            .with_mouth_curvature(7.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn eye_sign() {
        assert_eq!(Eye::Left.sign(), -1.0);
        assert_eq!(Eye::Right.sign(), 1.0);
    }
}
