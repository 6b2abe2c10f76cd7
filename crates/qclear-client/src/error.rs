//! Error types for talking to Qdrant.
//!
//! [`ApiError`] describes one failed request. [`ClearError`] is the fatal
//! subset that ends a run; per-collection failures never become a
//! `ClearError` and are counted in the run summary instead.

use std::error::Error as StdError;

/// A single request to the server failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent, returned a non-success status, or
    /// its body could not be decoded.
    #[error("request to {url} failed")]
    Transport {
        /// Full URL of the failed request.
        url: String,
        #[source]
        source: ureq::Error,
    },

    /// The response decoded but did not have the expected shape.
    #[error("unexpected response from {url}: {reason}")]
    Malformed {
        /// Full URL of the request.
        url: String,
        /// What was wrong with the response.
        reason: String,
    },
}

impl ApiError {
    /// Creates an [`ApiError::Transport`] for the given URL.
    pub fn transport(url: impl Into<String>, source: ureq::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates an [`ApiError::Malformed`] for the given URL.
    pub fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Failures that abort a run before or during listing.
#[derive(Debug, thiserror::Error)]
pub enum ClearError {
    /// The identity request to `GET /` failed.
    #[error("cannot connect to Qdrant at {url}")]
    Unreachable {
        url: String,
        #[source]
        source: ApiError,
    },

    /// The server answered but its title does not name Qdrant.
    #[error("server at {url} doesn't appear to be Qdrant")]
    NotQdrant {
        url: String,
        /// The title the server reported, if any.
        title: Option<String>,
    },

    /// The collection list could not be fetched.
    #[error("failed to get collections")]
    ListCollections(#[source] ApiError),

    /// The confirmation line could not be read.
    #[error("failed to read confirmation")]
    Prompt(#[source] std::io::Error),
}

/// Renders an error and its chain of sources on one line, separated by `: `.
pub fn report(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
