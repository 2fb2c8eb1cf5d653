//! JSON face configuration.
//!
//! A config names any subset of the render inputs; missing entries fall
//! back to [`FaceParameters::default`] and a 200×200 rect at the origin.
//!
//! ```json
//! { "width": 300, "height": 300, "mouth_curvature": -0.5, "color": "#c03" }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use faceit_graphics::types::{Color, Rect, Scalar};

use crate::error::ConfigError;
use crate::params::FaceParameters;

/// Bounds width/height used when a config does not give one.
pub const DEFAULT_SIZE: Scalar = 200.0;

/// Optional render inputs, as read from a config file or command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceConfig {
    pub x: Option<Scalar>,
    pub y: Option<Scalar>,
    pub width: Option<Scalar>,
    pub height: Option<Scalar>,
    pub scale: Option<Scalar>,
    pub eyes_open: Option<bool>,
    pub mouth_curvature: Option<Scalar>,
    pub line_width: Option<Scalar>,
    /// Color name or hex literal, see [`Color`]'s `FromStr`.
    pub color: Option<String>,
}

impl FaceConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown keys.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded face config from {}", path.display());
        Ok(config)
    }

    /// Layer `overrides` on top of `self`: every entry set in `overrides`
    /// wins.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            x: overrides.x.or(self.x),
            y: overrides.y.or(self.y),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            scale: overrides.scale.or(self.scale),
            eyes_open: overrides.eyes_open.or(self.eyes_open),
            mouth_curvature: overrides.mouth_curvature.or(self.mouth_curvature),
            line_width: overrides.line_width.or(self.line_width),
            color: overrides.color.or(self.color),
        }
    }

    /// The bounding rect to render into.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            (self.x.unwrap_or(0.0), self.y.unwrap_or(0.0)),
            (
                self.width.unwrap_or(DEFAULT_SIZE),
                self.height.unwrap_or(DEFAULT_SIZE),
            ),
        )
    }

    /// Resolve to validated [`FaceParameters`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Color`] for an unparseable color and
    /// [`ConfigError::Face`] for a negative or non-finite line width.
    pub fn parameters(&self) -> Result<FaceParameters, ConfigError> {
        let d = FaceParameters::default();
        let color = match &self.color {
            Some(s) => s.parse::<Color>()?,
            None => d.color,
        };
        let params = FaceParameters {
            scale: self.scale.unwrap_or(d.scale),
            eyes_open: self.eyes_open.unwrap_or(d.eyes_open),
            mouth_curvature: self.mouth_curvature.unwrap_or(d.mouth_curvature),
            line_width: self.line_width.unwrap_or(d.line_width),
            color,
        };
        params.validated().map_err(ConfigError::from)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::io::Write;

    use crate::error::FaceError;

    use super::*;

    #[test]
    fn empty_config_gives_defaults() {
        let c = FaceConfig::from_json("{}").unwrap();
        assert_eq!(c, FaceConfig::default());
        assert_eq!(c.parameters().unwrap(), FaceParameters::default());
        assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn full_config_parses() {
        let c = FaceConfig::from_json(
            r##"{
                "x": 10, "y": 20, "width": 300, "height": 100,
                "scale": 0.5, "eyes_open": false, "mouth_curvature": -0.75,
                "line_width": 2.5, "color": "#ff0000"
            }"##,
        )
        .unwrap();
        assert_eq!(c.bounds(), Rect::new(10.0, 20.0, 310.0, 120.0));
        let p = c.parameters().unwrap();
        assert_eq!(p.scale, 0.5);
        assert!(!p.eyes_open);
        assert_eq!(p.mouth_curvature, -0.75);
        assert_eq!(p.line_width, 2.5);
        assert_eq!(p.color, Color::RED);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FaceConfig::from_json(r#"{ "mouth": 1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "got {err:?}");
    }

    #[test]
    fn bad_color_is_reported() {
        let c = FaceConfig::from_json(r#"{ "color": "plaid" }"#).unwrap();
        let err = c.parameters().unwrap_err();
        assert!(matches!(err, ConfigError::Color(_)), "got {err:?}");
        assert!(err.to_string().contains("plaid"));
    }

    #[test]
    fn negative_line_width_is_reported() {
        let c = FaceConfig::from_json(r#"{ "line_width": -3 }"#).unwrap();
        assert!(matches!(
            c.parameters(),
            Err(ConfigError::Face(FaceError::InvalidLineWidth(w))) if w == -3.0
        ));
    }

    #[test]
    fn merge_prefers_overrides() {
        let base = FaceConfig {
            width: Some(100.0),
            scale: Some(0.5),
            color: Some("red".to_owned()),
            ..FaceConfig::default()
        };
        let over = FaceConfig {
            scale: Some(0.8),
            eyes_open: Some(false),
            ..FaceConfig::default()
        };
        let m = base.merge(over);
        assert_eq!(m.width, Some(100.0));
        assert_eq!(m.scale, Some(0.8));
        assert_eq!(m.eyes_open, Some(false));
        assert_eq!(m.color.as_deref(), Some("red"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mouth_curvature": 1.0 }}"#).unwrap();
        let c = FaceConfig::load(file.path()).unwrap();
        assert_eq!(c.mouth_curvature, Some(1.0));
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = FaceConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
