//! Error types for storefront.
//!
//! Catalog API failures come in two flavours: the request never produced a
//! usable answer (transport or decoding trouble), or the server answered with
//! a non-2xx status and an `{"error": "..."}` body. Callers treat the two
//! differently, so they are separate variants here.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for storefront operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Catalog API Errors ===
    /// The HTTP request failed before a response was received, or the
    /// response body could not be read.
    #[error("request to catalog API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog API rejected the request with a non-2xx status.
    #[error("catalog API rejected request ({status}): {}", message.as_deref().unwrap_or("no error message"))]
    Rejected {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid catalog URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for storefront operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a rejection error from a status and optional server message.
    #[must_use]
    pub fn rejected(status: StatusCode, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Create an invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Check if the server answered and refused the request.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The server-provided error string, if this is a rejection that carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_with_message() {
        let err = Error::rejected(StatusCode::NOT_FOUND, Some("Item not found".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Item not found"));
    }

    #[test]
    fn test_rejected_display_without_message() {
        let err = Error::rejected(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(err.to_string().contains("no error message"));
    }

    #[test]
    fn test_is_rejection() {
        assert!(Error::rejected(StatusCode::BAD_REQUEST, None).is_rejection());
        assert!(!Error::invalid_url("x", "bad").is_rejection());
    }

    #[test]
    fn test_server_message() {
        let err = Error::rejected(
            StatusCode::BAD_REQUEST,
            Some("Missing required fields".to_string()),
        );
        assert_eq!(err.server_message(), Some("Missing required fields"));
        assert_eq!(
            Error::rejected(StatusCode::BAD_REQUEST, None).server_message(),
            None
        );
        assert_eq!(Error::invalid_url("x", "bad").server_message(), None);
    }

    #[test]
    fn test_invalid_url_display() {
        let err = Error::invalid_url("ftp://nope", "unsupported scheme");
        let msg = err.to_string();
        assert!(msg.contains("ftp://nope"));
        assert!(msg.contains("unsupported scheme"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "base_url must not be empty".to_string(),
        };
        assert!(err.to_string().contains("base_url"));
    }
}
