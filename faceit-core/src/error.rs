//! Error types for parameter validation and config loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

use faceit_graphics::GraphicsError;
use faceit_graphics::types::Scalar;

// ---------------------------------------------------------------------------
// FaceError
// ---------------------------------------------------------------------------

/// A caller handed in parameters outside the renderer's contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceError {
    /// Stroke width was negative or not finite.
    InvalidLineWidth(Scalar),
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLineWidth(w) => {
                write!(f, "invalid line width {w}: must be a finite value >= 0")
            }
        }
    }
}

impl std::error::Error for FaceError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while loading a face configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The config text is not valid JSON for a [`FaceConfig`](crate::FaceConfig).
    Json(serde_json::Error),
    /// The `color` entry could not be parsed.
    Color(GraphicsError),
    /// The resulting parameters failed validation.
    Face(FaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json(e) => write!(f, "malformed config: {e}"),
            Self::Color(e) => write!(f, "{e}"),
            Self::Face(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Color(e) => Some(e),
            Self::Face(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<GraphicsError> for ConfigError {
    fn from(e: GraphicsError) -> Self {
        Self::Color(e)
    }
}

impl From<FaceError> for ConfigError {
    fn from(e: FaceError) -> Self {
        Self::Face(e)
    }
}
