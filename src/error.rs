//! Crate-level error types.

use std::fmt;

/// Errors produced by the wings crate.
#[derive(Debug)]
pub enum WingsError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The asset host could not bind its listener.
    Bind(String),
}

impl fmt::Display for WingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Bind(msg) => write!(f, "failed to bind listener: {msg}"),
        }
    }
}

impl std::error::Error for WingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = WingsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn bind_error_message() {
        let err = WingsError::Bind("address in use".into());
        assert_eq!(
            err.to_string(),
            "failed to bind listener: address in use"
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
