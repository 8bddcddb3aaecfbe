//! Core error types for parsind.
//!
//! [`ParsindError`] covers every failure that can abort building a route
//! table: invalid configuration, controllers that cannot be resolved, and
//! settings files that cannot be read or parsed.
//!
//! A controller that resolves but lacks a requested method is *not* an error.
//! Those gaps are recorded as missing handlers by the route registry.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for parsind.
#[derive(Error, Debug)]
pub enum ParsindError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid (e.g. an unknown
    /// controller case or an unsupported HTTP verb).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Resolution ───────────────────────────────────────────────────

    /// A controller could not be located at all.
    #[error("Cannot resolve controller '{}': {reason}", path.display())]
    ResolutionError {
        /// The resolved controller path that was looked up.
        path: PathBuf,
        /// Why the lookup failed.
        reason: String,
    },

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ParsindError {
    /// Shorthand for a [`ParsindError::ResolutionError`].
    pub fn unresolved(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ResolutionError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors raised while validating configuration,
    /// before any route has been bound.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigurationError(_) | Self::SerializationError(_))
    }
}

/// A convenience type alias for `Result<T, ParsindError>`.
pub type ParsindResult<T> = Result<T, ParsindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ParsindError::ConfigurationError("bad case".into());
        assert_eq!(err.to_string(), "Configuration error: bad case");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_resolution_error_display() {
        let err = ParsindError::unresolved("controllers/booksController", "not registered");
        assert_eq!(
            err.to_string(),
            "Cannot resolve controller 'controllers/booksController': not registered"
        );
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ParsindError = io_err.into();
        assert!(matches!(err, ParsindError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
