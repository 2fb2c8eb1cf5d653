use std::fmt;

/// Errors returned by graphics operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A color string was neither a known name nor a valid hex literal.
    InvalidColor(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(
                f,
                "invalid color \"{s}\": expected a color name or #rgb, #rrggbb, #rrggbbaa"
            ),
        }
    }
}

impl std::error::Error for GraphicsError {}
