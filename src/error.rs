//! Crate-level error types.

use std::fmt;

/// Errors produced by the scrollrig crate.
#[derive(Debug)]
pub enum RigError {
    /// A section range failed validation at construction time.
    InvalidRange {
        /// Offending range start.
        start: f32,
        /// Offending range length.
        length: f32,
        /// Human-readable reason.
        reason: &'static str,
    },
    /// Scroll track configuration failure (e.g. zero pages).
    InvalidTrack(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange {
                start,
                length,
                reason,
            } => {
                write!(
                    f,
                    "invalid section range (start={start}, length={length}): {reason}"
                )
            }
            Self::InvalidTrack(msg) => write!(f, "invalid scroll track: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
