//! Shim error types with exit-code classification

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Shim error types organized by pipeline stage
///
/// Every I/O failure is mapped into the domain variant of the stage it
/// occurred in, so the host always sees which part of the pipeline broke.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Argument Parser Errors
    // ─────────────────────────────────────────────────────────────
    #[error("invalid arguments: {message}")]
    ArgumentGrammar { message: String },

    // ─────────────────────────────────────────────────────────────
    // Path Resolver Errors
    // ─────────────────────────────────────────────────────────────
    #[error("cannot resolve path {path}: {message}")]
    PathResolution { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Target Resolver Errors
    // ─────────────────────────────────────────────────────────────
    #[error("editor target unavailable: {message}")]
    TargetUnavailable { message: String },

    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Dispatcher Errors
    // ─────────────────────────────────────────────────────────────
    #[error("failed to dispatch editor: {message}")]
    Dispatch { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn argument_grammar(message: impl Into<String>) -> Self {
        Self::ArgumentGrammar {
            message: message.into(),
        }
    }

    pub fn path_resolution(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::PathResolution {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn target_unavailable(message: impl Into<String>) -> Self {
        Self::TargetUnavailable {
            message: message.into(),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::Dispatch {
            message: message.into(),
        }
    }

    /// Process exit code reported to the host for this error.
    ///
    /// The host only observes the exit code and stderr, so each error
    /// class gets a distinct nonzero code:
    /// - `2` malformed argv
    /// - `3` path resolution failure
    /// - `4` target or configuration unavailable
    /// - `5` dispatch failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ArgumentGrammar { .. } => 2,
            Error::PathResolution { .. } => 3,
            Error::TargetUnavailable { .. }
            | Error::ConfigNotFound { .. }
            | Error::ConfigInvalid { .. } => 4,
            Error::Dispatch { .. } => 5,
        }
    }

    /// Check if this error is a usage error (the host sent argv the
    /// shim does not recognize).
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::ArgumentGrammar { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::argument_grammar("unknown flag '-x'");
        assert_eq!(err.to_string(), "invalid arguments: unknown flag '-x'");

        let err = Error::target_unavailable("command not found: mycode");
        assert!(err.to_string().contains("editor target unavailable"));
    }

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        assert_eq!(Error::argument_grammar("x").exit_code(), 2);
        assert_eq!(Error::path_resolution("/a", "x").exit_code(), 3);
        assert_eq!(Error::target_unavailable("x").exit_code(), 4);
        assert_eq!(Error::config_not_found("/c").exit_code(), 4);
        assert_eq!(Error::config_invalid("x").exit_code(), 4);
        assert_eq!(Error::dispatch("x").exit_code(), 5);
    }

    #[test]
    fn test_exit_codes_are_always_nonzero() {
        let errors = [
            Error::argument_grammar("x"),
            Error::path_resolution("/a", "x"),
            Error::target_unavailable("x"),
            Error::config_not_found("/c"),
            Error::config_invalid("x"),
            Error::dispatch("x"),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::argument_grammar("x").is_usage());
        assert!(!Error::dispatch("x").is_usage());
    }

    #[test]
    fn test_path_resolution_includes_path() {
        let err = Error::path_resolution("/tmp/missing.cs", "No such file or directory");
        assert!(err.to_string().contains("/tmp/missing.cs"));
        assert!(err.to_string().contains("No such file"));
    }
}
