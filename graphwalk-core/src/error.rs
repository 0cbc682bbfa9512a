//! Typed error handling for graphwalk.
//!
//! The traversal queries themselves never fail: absent inputs map to
//! fallback values. Errors only come from the edges of the library,
//! i.e. writing output lines, loading configuration and building graphs
//! from user-supplied descriptions.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for graphwalk operations.
#[derive(Error, Debug)]
pub enum GraphwalkError {
    /// Writing an output line failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided (e.g. a vertex handle from another graph)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GraphwalkError {
    /// Create an I/O error from the underlying cause.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller can keep going after this error.
    ///
    /// A broken config file falls back to defaults; everything else aborts.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GraphwalkError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

/// Convenience type alias for graphwalk results.
pub type GraphwalkResult<T> = Result<T, GraphwalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = GraphwalkError::io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(matches!(err, GraphwalkError::Io { .. }));
        assert!(err.to_string().contains("pipe closed"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_config_error_has_path() {
        let err = GraphwalkError::config("/tmp/graphwalk.toml", "expected a table");
        assert_eq!(err.path(), Some(&PathBuf::from("/tmp/graphwalk.toml")));
        assert!(err.to_string().contains("expected a table"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(GraphwalkError::config("graphwalk.toml", "bad").is_recoverable());
        assert!(!GraphwalkError::invalid_argument("A-B").is_recoverable());
        assert!(!GraphwalkError::internal("oops").is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        fn write_fails() -> GraphwalkResult<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))?;
            Ok(())
        }
        assert!(matches!(write_fails(), Err(GraphwalkError::Io { .. })));
    }
}
