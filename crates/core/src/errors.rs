use std::path::PathBuf;

/// Result type alias for penknife operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type shared by the penknife crates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An unrecognized log level token was supplied
    #[error("invalid log level '{token}': expected none, trace, debug, info, warn, error, or fatal")]
    InvalidLogLevel { token: String },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON text
    #[error("failed to parse JSON: {message}")]
    JsonParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// An operation involving a JSON key could not be carried out
    #[error("JSON key error: {message}")]
    JsonKey { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

// Conversion implementations
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonParse {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid-log-level error for an unrecognized token
    #[must_use]
    pub fn invalid_log_level(token: impl Into<String>) -> Self {
        Error::InvalidLogLevel {
            token: token.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a JSON key error
    #[must_use]
    pub fn json_key(message: impl Into<String>) -> Self {
        Error::JsonKey {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
