//! Stroke-able vector paths.
//!
//! A [`Path`] is an ordered list of drawing commands. Arcs are kept as
//! arcs (center, radius, angles, direction) rather than flattened, so that
//! consumers can hand them to a native arc primitive when one exists.
//! [`Path::to_bez_path`] lowers everything to cubic Beziers for backends
//! that only understand those.
//!
//! Angles are in radians, measured from the +X axis toward +Y. Because Y
//! points down, increasing angle turns clockwise on screen.

use std::f64::consts::TAU;

use kurbo::{BezPath, Vec2};

use crate::types::{EPSILON, Point, Scalar};

/// Arc flattening tolerance used when a caller's value is unusable.
pub const DEFAULT_TOLERANCE: Scalar = 0.01;

// ---------------------------------------------------------------------------
// Arc
// ---------------------------------------------------------------------------

/// A circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: Scalar,
    pub start_angle: Scalar,
    pub end_angle: Scalar,
    /// Sweep direction as seen on screen.
    pub clockwise: bool,
}

impl Arc {
    /// The point where the arc begins.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// The point where the arc ends.
    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle())
    }

    /// Signed sweep from `start_angle` to `end_angle` in the arc's
    /// direction: positive when clockwise, negative otherwise.
    ///
    /// A request spanning a full turn or more sweeps exactly one full turn.
    /// Anything shorter is reduced modulo a turn, so a clockwise arc from
    /// 0 to -π/2 sweeps 3π/2.
    pub fn sweep_angle(&self) -> Scalar {
        let delta = self.end_angle - self.start_angle;
        if delta.abs() >= TAU - EPSILON {
            return if self.clockwise { TAU } else { -TAU };
        }
        if self.clockwise {
            delta.rem_euclid(TAU)
        } else {
            -(-delta).rem_euclid(TAU)
        }
    }

    /// True if the arc closes on itself.
    pub fn is_full_circle(&self) -> bool {
        self.sweep_angle().abs() >= TAU - EPSILON
    }

    fn point_at(&self, angle: Scalar) -> Point {
        let (sin, cos) = angle.sin_cos();
        self.center + Vec2::new(cos, sin) * self.radius
    }

    fn to_kurbo(self) -> kurbo::Arc {
        kurbo::Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: self.start_angle,
            sweep_angle: self.sweep_angle(),
            x_rotation: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// PathCommand
// ---------------------------------------------------------------------------

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Circular arc. If a current point exists, a straight segment joins it
    /// to the arc's start point.
    Arc(Arc),
    /// Cubic Bezier: first control, second control, end point.
    CurveTo(Point, Point, Point),
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// An ordered sequence of drawing commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// A path consisting of one full-turn arc starting at angle 0.
    pub fn circle(center: Point, radius: Scalar, clockwise: bool) -> Self {
        let mut path = Self::new();
        path.arc(center, radius, 0.0, TAU, clockwise);
        path
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn arc(
        &mut self,
        center: Point,
        radius: Scalar,
        start_angle: Scalar,
        end_angle: Scalar,
        clockwise: bool,
    ) {
        self.commands.push(PathCommand::Arc(Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        }));
    }

    pub fn curve_to(&mut self, cp1: Point, cp2: Point, p: Point) {
        self.commands.push(PathCommand::CurveTo(cp1, cp2, p));
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The current point after all commands have run, if any.
    pub fn end_point(&self) -> Option<Point> {
        self.commands.last().map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CurveTo(_, _, p) => p,
            PathCommand::Arc(arc) => arc.end_point(),
        })
    }

    /// Lower to a `kurbo::BezPath`.
    ///
    /// Arcs are approximated by cubic segments within `tolerance`. A line
    /// or curve with no current point starts its own subpath at its
    /// destination. A `tolerance` that is not positive and finite is
    /// replaced by [`DEFAULT_TOLERANCE`]; kurbo never terminates on zero.
    pub fn to_bez_path(&self, tolerance: Scalar) -> BezPath {
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            log::warn!("arc tolerance {tolerance} is unusable, using {DEFAULT_TOLERANCE}");
            DEFAULT_TOLERANCE
        };
        let mut bp = BezPath::new();
        let mut current: Option<Point> = None;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => bp.move_to(p),
                PathCommand::LineTo(p) => {
                    if current.is_some() {
                        bp.line_to(p);
                    } else {
                        bp.move_to(p);
                    }
                }
                PathCommand::CurveTo(cp1, cp2, p) => {
                    if current.is_some() {
                        bp.curve_to(cp1, cp2, p);
                    } else {
                        bp.move_to(p);
                    }
                }
                PathCommand::Arc(arc) => {
                    let start = arc.start_point();
                    match current {
                        None => bp.move_to(start),
                        Some(c) if c.distance(start) > EPSILON => bp.line_to(start),
                        Some(_) => {}
                    }
                    for el in arc.to_kurbo().append_iter(tolerance) {
                        bp.push(el);
                    }
                }
            }
            current = bp.elements().last().and_then(kurbo::PathEl::end_point);
        }

        bp
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
