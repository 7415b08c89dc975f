//! Crate-level error types.
//!
//! The camera itself never fails; degenerate input is absorbed by skipping
//! a tick. Errors only arise around it: loading presets and running the
//! demo viewer.

use std::fmt;

/// Errors produced by the trackball crate.
#[derive(Debug)]
pub enum TrackballError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the camera cannot use.
    InvalidOptions(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TrackballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TrackballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
