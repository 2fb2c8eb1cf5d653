//! Core types shared across the `FaceIt` crates.
//!
//! Geometry is expressed with `kurbo` primitives; this module adds the
//! scalar alias, the comparison tolerance and an RGBA [`Color`].

use std::str::FromStr;

pub use kurbo::{Point, Rect, Vec2};

use crate::error::GraphicsError;

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias matching `kurbo`'s coordinate type.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
    pub a: Scalar,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);
    pub const BROWN: Self = Self::rgb(0.6, 0.4, 0.2);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    #[inline]
    pub const fn rgb(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Look up one of the named constants (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            "orange" => Self::ORANGE,
            "purple" => Self::PURPLE,
            "brown" => Self::BROWN,
            "gray" | "grey" => Self::GRAY,
            "clear" => Self::CLEAR,
            _ => return None,
        };
        Some(c)
    }

    /// The color as four bytes, each component clamped to [0, 1] first.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "components are clamped to [0, 255] before the cast"
    )]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: Scalar| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| Scalar::from(v) / 255.0);
        let nibble = |s: &str| {
            u8::from_str_radix(s, 16)
                .ok()
                .map(|v| Scalar::from(v * 17) / 255.0)
        };
        match hex.len() {
            3 => Some(Self::rgb(
                nibble(&hex[0..1])?,
                nibble(&hex[1..2])?,
                nibble(&hex[2..3])?,
            )),
            6 => Some(Self::rgb(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Some(Self::new(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = GraphicsError;

    /// Parse a color name (`"blue"`) or a hex literal (`"#00f"`,
    /// `"#0000ff"`, `"#0000ff80"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::named(s),
        };
        parsed.ok_or_else(|| GraphicsError::InvalidColor(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// LineCap
// ---------------------------------------------------------------------------

/// Stroke line-cap styles (matches SVG / PostScript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl FromStr for LineCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "unknown line cap \"{s}\": expected \"butt\", \"round\" or \"square\""
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn color_defaults() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::BLUE.a, 1.0);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!("blue".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("Grey".parse::<Color>(), Ok(Color::GRAY));
        assert_eq!(" red ".parse::<Color>(), Ok(Color::RED));
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!("#00f".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::RED));
        let c: Color = "#00ff0080".parse().unwrap();
        assert_eq!(c.to_rgba8(), [0, 255, 0, 128]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(GraphicsError::InvalidColor(s)) if s == "chartreuse"
        ));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn parse_rejects_signed_hex_digits() {
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("#+ff+ff+ff".parse::<Color>().is_err());
        assert!("#-1-1-1".parse::<Color>().is_err());
    }

    #[test]
    fn linecap_from_str() {
        assert_eq!("butt".parse::<LineCap>(), Ok(LineCap::Butt));
        assert_eq!("ROUND".parse::<LineCap>(), Ok(LineCap::Round));
        assert_eq!("square".parse::<LineCap>(), Ok(LineCap::Square));
        assert!("pointy".parse::<LineCap>().is_err());
        assert_eq!(LineCap::default(), LineCap::Butt);
    }

    #[test]
    fn rgba8_clamps() {
        let c = Color::new(2.0, -1.0, 0.5, 1.0);
        assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
    }
}
