//! Error types for collaborator calls

use thiserror::Error;

/// A draft post that does not have the shape the create endpoint accepts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field absent, null, or blank
    #[error("validation failed: {0} is required")]
    MissingField(&'static str),

    /// Field present with a non-matching JSON type
    #[error("validation failed: {field} must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Failure of a backend call
///
/// Not-found responses are reported as [`ApiError::Status`], like any other
/// non-success status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Transport failure reported as plain text, e.g. by a non-HTTP backend
    #[error("{0}")]
    Transport(String),

    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
