//! Error types and handling for parse result materialization

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for oxbind operations
///
/// Failures of the external parsing engine are not represented here: they are
/// returned to the caller as the engine's own error type.
#[derive(Debug, Error)]
pub enum OxbindError {
    /// The interchange-encoded program is structurally malformed
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The decoded program does not start with a syntax node
    #[error("Decode error: program root is {found}, expected a syntax node")]
    InvalidRoot { found: &'static str },

    /// Parse options that no engine can act on
    #[error("Invalid parse options: {message}")]
    InvalidOptions { message: String },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Edit buffer mutation rejected
    #[error("Edit error: {message}")]
    EditError { message: String },

    /// Source map serialization errors
    #[error("Source map error: {message}")]
    SourceMapError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Options,
    Config,
    Edit,
    SourceMap,
    Io,
}

impl OxbindError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OxbindError::Decode { .. } | OxbindError::InvalidRoot { .. } => ErrorKind::Decode,
            OxbindError::InvalidOptions { .. } => ErrorKind::Options,
            OxbindError::ConfigError { .. } => ErrorKind::Config,
            OxbindError::EditError { .. } => ErrorKind::Edit,
            OxbindError::SourceMapError { .. } => ErrorKind::SourceMap,
            OxbindError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Check if this error leaves the facade usable.
    ///
    /// A decode failure only poisons the tree view; module records, comments,
    /// diagnostics and the edit buffer are still readable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Decode | ErrorKind::Edit)
    }

    /// Create a decode error
    pub fn decode_error(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    /// Create an invalid options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an edit error
    pub fn edit_error(message: impl Into<String>) -> Self {
        Self::EditError {
            message: message.into(),
        }
    }

    /// Create a source map error
    pub fn source_map_error(message: impl Into<String>) -> Self {
        Self::SourceMapError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for OxbindError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_recoverable() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = OxbindError::decode_error(source);
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.is_recoverable());
        assert!(err.to_string().starts_with("Decode error:"));
    }

    #[test]
    fn config_errors_are_fatal() {
        let err = OxbindError::config_error("missing file");
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }

    #[test]
    fn every_kind_has_a_constructor() {
        let kinds: Vec<ErrorKind> = [
            OxbindError::InvalidRoot { found: "an array" },
            OxbindError::invalid_options("lang"),
            OxbindError::config_error("missing"),
            OxbindError::edit_error("overlap"),
            OxbindError::source_map_error("serialize"),
            OxbindError::io_error("a.json", std::io::Error::other("denied")),
        ]
        .iter()
        .map(OxbindError::kind)
        .collect();
        assert_eq!(
            kinds,
            [
                ErrorKind::Decode,
                ErrorKind::Options,
                ErrorKind::Config,
                ErrorKind::Edit,
                ErrorKind::SourceMap,
                ErrorKind::Io,
            ]
        );
    }

    #[test]
    fn io_error_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: OxbindError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
