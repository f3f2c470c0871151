//! Error types for keyword-frequency.
//!
//! This module defines the errors a scan can fail with. Every variant renders
//! as a short sentence so callers can show it to an end user as-is.

/// Error type for scan operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL is malformed or does not use the `http`/`https` scheme.
    ///
    /// Raised before any network access.
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller.
        url: String,
        /// What the validator rejected.
        reason: String,
    },

    /// The page could not be reached (DNS, refused connection, timeout, ...).
    #[error("page at '{url}' is unreachable: {source}")]
    Unreachable {
        /// The URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The connection failed while the response body was being streamed.
    #[error("reading the response from '{url}' failed: {source}")]
    BodyRead {
        /// The URL whose body was being read.
        url: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, Error>;
