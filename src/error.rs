//! Crate-level error types.

use std::fmt;

/// Errors produced by the orthocam crate.
///
/// The per-frame path never fails; these only surface at the configuration
/// and host-glue boundaries.
#[derive(Debug)]
pub enum OrthocamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration.
    InvalidOptions(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for OrthocamError {
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

impl std::error::Error for OrthocamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrthocamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_message() {
        let err = OrthocamError::InvalidOptions("min_zoom > max_zoom".into());
        assert_eq!(err.to_string(), "invalid options: min_zoom > max_zoom");
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = OrthocamError::from(io);
        assert!(err.source().is_some());
        assert!(OrthocamError::Viewer("x".into()).source().is_none());
    }
}
