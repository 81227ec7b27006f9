//! Error types for the rollcall admin services

use std::{error::Error as StdError, fmt};

/// Main error type for the rollcall services
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Database error
    Database(String),

    /// Authentication error
    Authentication(String),

    /// Authorization error (authenticated but below the required role)
    Forbidden {
        /// Role tier required for the operation
        required: String,
    },

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Upstream HTTP error (web server talking to the API server)
    Upstream(String),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Database(msg) => write!(f, "Database error: {msg}"),
            Self::Authentication(msg) => write!(f, "Authentication failed: {msg}"),
            Self::Forbidden { required } => {
                write!(f, "Requires at least the {required} role")
            }
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Upstream(msg) => write!(f, "Upstream API error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}
