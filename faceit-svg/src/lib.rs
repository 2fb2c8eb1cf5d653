//! SVG renderer for `FaceIt` path sets.
//!
//! Converts a [`PathSet`] into an SVG [`Document`] using the `svg` crate.
//!
//! Key design points:
//! - Face geometry is already in screen space (Y down), which is also SVG's
//!   convention, so coordinates are written unchanged.
//! - The `viewBox` is the rect the face was rendered into, so the face
//!   lands exactly where the host laid out its view.
//! - Path data is built as raw `d` strings to preserve `f64` precision
//!   (the `svg` crate's `Data` builder uses `f32`). Arcs are lowered to
//!   cubic Beziers through `kurbo`.
//! - Every path is stroked, never filled, in [`PathSet::iter`] order.

use kurbo::PathEl;
use svg::Document;
use svg::node::element::{Group, Path as SvgPath, Rectangle};

use faceit_core::geometry::{PathSet, StrokedPath};
use faceit_graphics::path::{DEFAULT_TOLERANCE, Path};
use faceit_graphics::types::{Color, LineCap, Rect, Scalar};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a [`PathSet`] drawn inside `bounds` to an SVG [`Document`].
#[must_use]
pub fn render(set: &PathSet, bounds: Rect) -> Document {
    render_with_options(set, bounds, &RenderOptions::default())
}

/// Render a [`PathSet`] to an SVG string.
#[must_use]
pub fn render_to_string(set: &PathSet, bounds: Rect) -> String {
    render(set, bounds).to_string()
}

/// Options controlling SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Number of decimal places for coordinates. Default: 4.
    pub precision: usize,
    /// Maximum distance between an arc and its cubic approximation.
    /// Default: 0.01. Zero, negative or non-finite values fall back to the
    /// default.
    pub tolerance: Scalar,
    /// Line cap for every stroke. Default: butt.
    pub line_cap: LineCap,
    /// Fill the whole view box with this color before drawing.
    pub background: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            tolerance: DEFAULT_TOLERANCE,
            line_cap: LineCap::Butt,
            background: None,
        }
    }
}

/// Render a [`PathSet`] to an SVG [`Document`] with custom options.
#[must_use]
pub fn render_with_options(set: &PathSet, bounds: Rect, opts: &RenderOptions) -> Document {
    let mut face = Group::new().set("class", "face");
    for (feature, stroked) in set.iter() {
        face = face.add(render_stroke(stroked, set.color, opts).set("id", feature.name()));
    }
    log::debug!("built SVG face group for {bounds:?}");

    build_document(bounds, opts, face)
}

// ---------------------------------------------------------------------------
// Individual path renderer
// ---------------------------------------------------------------------------

/// Render a stroked path to an SVG `<path>` element.
fn render_stroke(stroked: &StrokedPath, color: Color, opts: &RenderOptions) -> SvgPath {
    let d = path_to_d(&stroked.path, opts.precision, opts.tolerance);

    let mut el = SvgPath::new()
        .set("d", d)
        .set("fill", "none")
        .set("stroke", color_to_svg(color))
        .set("stroke-width", fmt_scalar(stroked.line_width, opts.precision))
        .set("stroke-linecap", linecap_to_svg(opts.line_cap));

    if color.a < 1.0 {
        el = el.set(
            "stroke-opacity",
            fmt_scalar(color.a.clamp(0.0, 1.0), opts.precision),
        );
    }

    el
}

// ---------------------------------------------------------------------------
// Path → SVG "d" attribute
// ---------------------------------------------------------------------------

/// Convert a [`Path`] to an SVG path data string (M, L, Q, C, Z).
fn path_to_d(path: &Path, precision: usize, tolerance: Scalar) -> String {
    let bp = path.to_bez_path(tolerance);
    let mut d = String::with_capacity(bp.elements().len() * 40);

    for el in bp.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                d.push('M');
                write_point(&mut d, p.x, p.y, precision);
            }
            PathEl::LineTo(p) => {
                d.push('L');
                write_point(&mut d, p.x, p.y, precision);
            }
            PathEl::QuadTo(p1, p2) => {
                d.push('Q');
                write_point(&mut d, p1.x, p1.y, precision);
                d.push(' ');
                write_point(&mut d, p2.x, p2.y, precision);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                d.push('C');
                write_point(&mut d, p1.x, p1.y, precision);
                d.push(' ');
                write_point(&mut d, p2.x, p2.y, precision);
                d.push(' ');
                write_point(&mut d, p3.x, p3.y, precision);
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }

    d
}

/// Write "x,y" to the string with the given precision.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, x: Scalar, y: Scalar, precision: usize) {
    use std::fmt::Write;
    let x = if x == 0.0 { 0.0 } else { x };
    let y = if y == 0.0 { 0.0 } else { y };
    let _ = write!(d, "{x:.precision$},{y:.precision$}");
}

// ---------------------------------------------------------------------------
// Attribute helpers
// ---------------------------------------------------------------------------

/// Convert a [`Color`] to an SVG color string. Alpha is emitted
/// separately.
fn color_to_svg(c: Color) -> String {
    let [r, g, b, _] = c.to_rgba8();
    match (r, g, b) {
        (0, 0, 0) => "black".to_owned(),
        (255, 255, 255) => "white".to_owned(),
        _ => format!("#{r:02x}{g:02x}{b:02x}"),
    }
}

const fn linecap_to_svg(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    }
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        let trimmed = if trimmed == "-0" { "0" } else { trimmed };
        trimmed.to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Document assembly
// ---------------------------------------------------------------------------

fn build_document(bounds: Rect, opts: &RenderOptions, content: Group) -> Document {
    let p = opts.precision;
    let (w, h) = (bounds.width(), bounds.height());

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_scalar(bounds.x0, p),
                fmt_scalar(bounds.y0, p),
                fmt_scalar(w, p),
                fmt_scalar(h, p),
            ),
        )
        .set("width", fmt_scalar(w, p))
        .set("height", fmt_scalar(h, p));

    if let Some(bg) = opts.background {
        let mut rect = Rectangle::new()
            .set("x", fmt_scalar(bounds.x0, p))
            .set("y", fmt_scalar(bounds.y0, p))
            .set("width", fmt_scalar(w, p))
            .set("height", fmt_scalar(h, p))
            .set("fill", color_to_svg(bg));
        if bg.a < 1.0 {
            rect = rect.set("fill-opacity", fmt_scalar(bg.a.clamp(0.0, 1.0), p));
        }
        doc = doc.add(rect);
    }

    doc.add(content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use faceit_core::geometry::{path_for_eye, path_for_mouth};
    use faceit_core::params::{Eye, FaceParameters};
    use faceit_graphics::types::Point;

    use super::*;

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    // -- path_to_d tests --

    #[test]
    fn test_path_to_d_empty() {
        assert_eq!(path_to_d(&Path::new(), 4, 0.01), "");
    }

    #[test]
    fn test_path_to_d_closed_eye_is_line() {
        let eye = path_for_eye(Eye::Left, Point::new(100.0, 100.0), 90.0, false, 5.0);
        assert_eq!(path_to_d(&eye.path, 1, 0.01), "M61.0,70.0L79.0,70.0");
    }

    #[test]
    fn test_path_to_d_mouth_is_single_cubic() {
        let mouth = path_for_mouth(Point::new(100.0, 100.0), 90.0, 0.5, 5.0);
        assert_eq!(
            path_to_d(&mouth.path, 0, 0.01),
            "M55,145C85,160 115,160 145,145"
        );
    }

    #[test]
    fn test_path_to_d_circle_uses_cubics() {
        let circle = Path::circle(Point::new(10.0, 10.0), 5.0, true);
        let d = path_to_d(&circle, 2, 0.01);
        assert!(d.starts_with("M15.00,10.00C"), "unexpected start: {d}");
        assert!(!d.contains('L'));
        assert!(!d.contains('Z'));
    }

    #[test]
    fn test_write_point_negative_zero() {
        let mut d = String::new();
        write_point(&mut d, -0.0, -0.0, 1);
        assert_eq!(d, "0.0,0.0");
    }

    // -- attribute tests --

    #[test]
    fn test_color_to_svg() {
        assert_eq!(color_to_svg(Color::BLACK), "black");
        assert_eq!(color_to_svg(Color::WHITE), "white");
        assert_eq!(color_to_svg(Color::BLUE), "#0000ff");
        assert_eq!(color_to_svg(Color::new(0.5, 0.5, 0.5, 0.2)), "#808080");
    }

    #[test]
    fn test_fmt_scalar_trailing_zeros() {
        assert_eq!(fmt_scalar(1.0, 4), "1");
        assert_eq!(fmt_scalar(1.5, 4), "1.5");
        assert_eq!(fmt_scalar(-0.00001, 4), "0");
        assert_eq!(fmt_scalar(200.0, 0), "200");
    }

    #[test]
    fn test_render_stroke_attributes() {
        let eye = path_for_eye(Eye::Right, Point::new(100.0, 100.0), 90.0, true, 2.5);
        let s = render_stroke(&eye, Color::RED, &RenderOptions::default()).to_string();
        assert!(s.contains("fill=\"none\""), "missing fill=none: {s}");
        assert!(s.contains("stroke=\"#ff0000\""), "missing stroke: {s}");
        assert!(s.contains("stroke-width=\"2.5\""), "missing width: {s}");
        assert!(s.contains("stroke-linecap=\"butt\""), "missing linecap: {s}");
        assert!(!s.contains("stroke-opacity"), "opaque color: {s}");
    }

    #[test]
    fn test_render_stroke_translucent() {
        let eye = path_for_eye(Eye::Right, Point::new(100.0, 100.0), 90.0, true, 2.5);
        let s = render_stroke(&eye, Color::new(0.0, 0.0, 1.0, 0.5), &RenderOptions::default())
            .to_string();
        assert!(s.contains("stroke-opacity=\"0.5\""), "missing opacity: {s}");
    }

    // -- full render tests --

    #[test]
    fn test_render_default_face() {
        let set = faceit_core::render(square(), &FaceParameters::default());
        let svg = render_to_string(&set, square());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox=\"0 0 200 200\""), "viewBox: {svg}");
        assert!(svg.contains("stroke=\"#0000ff\""), "blue stroke: {svg}");
        assert_eq!(svg.matches("<path").count(), 4);
        assert!(svg.contains("stroke-width=\"5\""));
    }

    #[test]
    fn test_render_preserves_order() {
        let set = faceit_core::render(square(), &FaceParameters::default());
        let svg = render_to_string(&set, square());
        let pos = |id: &str| svg.find(&format!("id=\"{id}\"")).expect(id);
        assert!(pos("skull") < pos("left-eye"));
        assert!(pos("left-eye") < pos("right-eye"));
        assert!(pos("right-eye") < pos("mouth"));
    }

    #[test]
    fn test_render_offset_bounds() {
        let bounds = Rect::new(50.0, 25.0, 150.0, 75.0);
        let set = faceit_core::render(bounds, &FaceParameters::default());
        let svg = render_to_string(&set, bounds);
        assert!(svg.contains("viewBox=\"50 25 100 50\""), "viewBox: {svg}");
        assert!(svg.contains("width=\"100\""));
    }

    #[test]
    fn test_render_background() {
        let set = faceit_core::render(square(), &FaceParameters::default());
        let opts = RenderOptions {
            background: Some(Color::WHITE),
            line_cap: LineCap::Round,
            ..RenderOptions::default()
        };
        let svg = render_with_options(&set, square(), &opts).to_string();
        assert!(svg.contains("<rect"), "missing background: {svg}");
        assert!(svg.contains("fill=\"white\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.find("<rect").unwrap() < svg.find("<path").unwrap());
    }

    #[test]
    fn test_render_zero_tolerance_uses_default() {
        let set = faceit_core::render(square(), &FaceParameters::default());
        let opts = RenderOptions {
            tolerance: 0.0,
            ..RenderOptions::default()
        };
        assert_eq!(
            render_with_options(&set, square(), &opts).to_string(),
            render(&set, square()).to_string()
        );
    }
}
