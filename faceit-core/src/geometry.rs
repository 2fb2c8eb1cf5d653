//! The face renderer.
//!
//! Every feature is derived from two values: the skull radius and the
//! skull center. Both come from the bounding rect (and `scale`); the
//! proportions in [`ratios`](crate::ratios) do the rest.
//!
//! Coordinates are screen space with Y growing downward. The rect is used
//! as given: callers must convert it into the drawing surface's local
//! coordinate space before rendering.

use std::f64::consts::TAU;

use faceit_graphics::path::Path;
use faceit_graphics::types::{Color, Point, Rect, Scalar};

use crate::params::{Eye, FaceParameters};
use crate::ratios::{
    SKULL_RADIUS_TO_EYE_OFFSET, SKULL_RADIUS_TO_EYE_RADIUS, SKULL_RADIUS_TO_MOUTH_HEIGHT,
    SKULL_RADIUS_TO_MOUTH_OFFSET, SKULL_RADIUS_TO_MOUTH_WIDTH,
};

/// Stroke width of the skull outline. The skull ignores
/// [`FaceParameters::line_width`] and is always drawn at this width.
pub const SKULL_LINE_WIDTH: Scalar = 5.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A path paired with the width it should be stroked at.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub path: Path,
    pub line_width: Scalar,
}

/// The parts of a face, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Skull,
    LeftEye,
    RightEye,
    Mouth,
}

impl Feature {
    pub const ALL: [Self; 4] = [Self::Skull, Self::LeftEye, Self::RightEye, Self::Mouth];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Skull => "skull",
            Self::LeftEye => "left-eye",
            Self::RightEye => "right-eye",
            Self::Mouth => "mouth",
        }
    }
}

/// The four stroked paths of one face plus their shared color.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSet {
    pub skull: StrokedPath,
    pub left_eye: StrokedPath,
    pub right_eye: StrokedPath,
    pub mouth: StrokedPath,
    pub color: Color,
}

impl PathSet {
    pub const fn get(&self, feature: Feature) -> &StrokedPath {
        match feature {
            Feature::Skull => &self.skull,
            Feature::LeftEye => &self.left_eye,
            Feature::RightEye => &self.right_eye,
            Feature::Mouth => &self.mouth,
        }
    }

    /// All paths in stroke order: skull, left eye, right eye, mouth.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, &StrokedPath)> {
        Feature::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

// ---------------------------------------------------------------------------
// Skull
// ---------------------------------------------------------------------------

/// Half the shorter side of `rect`, times `scale`.
///
/// An empty rect gives a zero radius; the resulting paths collapse to
/// points rather than failing.
pub fn skull_radius(rect: Rect, scale: Scalar) -> Scalar {
    rect.width().min(rect.height()) / 2.0 * scale
}

/// Midpoint of `rect`, in the rect's own coordinate space.
pub fn skull_center(rect: Rect) -> Point {
    rect.center()
}

/// Full counter-clockwise circle around the skull center.
pub fn path_for_skull(center: Point, radius: Scalar) -> StrokedPath {
    let mut path = Path::new();
    path.arc(center, radius, 0.0, TAU, false);
    StrokedPath {
        path,
        line_width: SKULL_LINE_WIDTH,
    }
}

// ---------------------------------------------------------------------------
// Eyes
// ---------------------------------------------------------------------------

/// Eyes sit one eye-offset above the skull center and one eye-offset to
/// either side of it.
pub fn center_of_eye(eye: Eye, skull_center: Point, skull_radius: Scalar) -> Point {
    let offset = skull_radius / SKULL_RADIUS_TO_EYE_OFFSET;
    Point::new(
        eye.sign().mul_add(offset, skull_center.x),
        skull_center.y - offset,
    )
}

/// An open eye is a clockwise circle; a closed eye is a horizontal slit
/// one eye-diameter long.
pub fn path_for_eye(
    eye: Eye,
    skull_center: Point,
    skull_radius: Scalar,
    eyes_open: bool,
    line_width: Scalar,
) -> StrokedPath {
    let eye_radius = skull_radius / SKULL_RADIUS_TO_EYE_RADIUS;
    let c = center_of_eye(eye, skull_center, skull_radius);

    let mut path = Path::new();
    if eyes_open {
        path.arc(c, eye_radius, 0.0, TAU, true);
    } else {
        path.move_to(Point::new(c.x - eye_radius, c.y));
        path.line_to(Point::new(c.x + eye_radius, c.y));
    }

    StrokedPath { path, line_width }
}

// ---------------------------------------------------------------------------
// Mouth
// ---------------------------------------------------------------------------

/// Clamp curvature to [-1, 1]. NaN falls through both bounds and lands on
/// -1, a full frown.
fn clamp_curvature(curvature: Scalar) -> Scalar {
    if curvature.is_nan() {
        log::debug!("mouth curvature is NaN, drawing a full frown");
        return -1.0;
    }
    if (-1.0..=1.0).contains(&curvature) {
        return curvature;
    }
    let clamped = curvature.clamp(-1.0, 1.0);
    log::debug!("mouth curvature {curvature} clamped to {clamped}");
    clamped
}

/// A single cubic across a box centered horizontally below the skull
/// center.
///
/// Both control points are pushed down by `curvature * box height`.
/// Y grows downward, so positive curvature bends the middle of the curve
/// below its ends (a smile) and negative curvature bends it above (a
/// frown).
///
/// The box is normalized before use, so a negative skull radius (from a
/// negative `scale`) still draws left to right and keeps the sign of the
/// curvature.
pub fn path_for_mouth(
    skull_center: Point,
    skull_radius: Scalar,
    mouth_curvature: Scalar,
    line_width: Scalar,
) -> StrokedPath {
    let width = skull_radius / SKULL_RADIUS_TO_MOUTH_WIDTH;
    let height = skull_radius / SKULL_RADIUS_TO_MOUTH_HEIGHT;
    let offset = skull_radius / SKULL_RADIUS_TO_MOUTH_OFFSET;

    let mouth = Rect::from_origin_size(
        (skull_center.x - width / 2.0, skull_center.y + offset),
        (width, height),
    )
    .abs();
    let mid_y = mouth.center().y;

    let smile = clamp_curvature(mouth_curvature) * mouth.height();

    let start = Point::new(mouth.x0, mid_y);
    let end = Point::new(mouth.x1, mid_y);
    let cp1 = Point::new(start.x + mouth.width() / 3.0, start.y + smile);
    let cp2 = Point::new(end.x - mouth.width() / 3.0, start.y + smile);

    let mut path = Path::new();
    path.move_to(start);
    path.curve_to(cp1, cp2, end);

    StrokedPath { path, line_width }
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

/// Build the four paths of a face inside `rect`.
///
/// Output order is skull, left eye, right eye, mouth. The color is passed
/// through for the consumer to stroke with.
pub fn render(rect: Rect, params: &FaceParameters) -> PathSet {
    let radius = skull_radius(rect, params.scale);
    let center = skull_center(rect);
    log::debug!("rendering face: rect={rect:?} skull_radius={radius} center={center:?}");

    PathSet {
        skull: path_for_skull(center, radius),
        left_eye: path_for_eye(
            Eye::Left,
            center,
            radius,
            params.eyes_open,
            params.line_width,
        ),
        right_eye: path_for_eye(
            Eye::Right,
            center,
            radius,
            params.eyes_open,
            params.line_width,
        ),
        mouth: path_for_mouth(center, radius, params.mouth_curvature, params.line_width),
        color: params.color,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
