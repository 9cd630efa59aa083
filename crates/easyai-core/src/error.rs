//! Error types for the itinerary library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Message used when the server answers with an error but no usable body.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Comprehensive error type for all itinerary operations.
///
/// The plan parser itself never fails; these errors come from the
/// collaborators around it (validation, HTTP, configuration).
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    /// Transport-level HTTP failures (connection refused, timeout, ...)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The remote API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The remote API answered with a body that does not match the schema
    #[error("Invalid response structure from server: {reason}")]
    InvalidResponse { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating HTTP errors with optional context.
pub struct HttpErrorBuilder {
    message: String,
}

impl HttpErrorBuilder {
    /// Create a new HTTP error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> ItineraryError {
        ItineraryError::Http {
            message: self.message,
            source,
        }
    }
}

impl ItineraryError {
    /// Creates a builder for HTTP errors.
    pub fn http(message: impl Into<String>) -> HttpErrorBuilder {
        HttpErrorBuilder::new(message)
    }

    /// Creates an API error, substituting the generic message for an empty
    /// body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            body
        };
        Self::Api { status, message }
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Returns the field-level errors when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ItineraryError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Extension trait for Result to attach configuration context to any error.
pub trait ResultExt<T> {
    /// Add context to any error type, converting to ItineraryError.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| ItineraryError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
