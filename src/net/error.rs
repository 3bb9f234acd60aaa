//! Error taxonomy for REST calls and form submission.
//!
//! ERROR HANDLING
//! ==============
//! Every failure stays inside the view that caused it: views log the error
//! and render a fixed message. Variants exist so logs say what went wrong,
//! not so callers can branch on detail.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;

/// Failure of a remote call or a client-side form check.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("http {status}: {reason}")]
    Http { status: u16, reason: String },
    /// A response body did not match its declared shape, or a form value
    /// failed a local check before any request was sent.
    #[error("validation failed: {0}")]
    Validation(String),
    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Map a response status to `Ok(())` for 2xx and `Err(Http)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for any status outside `200..=299`.
    pub fn from_status(status: u16, reason: &str) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Http {
                status,
                reason: reason.to_owned(),
            })
        }
    }

    /// True when the server rejected the credential itself.
    ///
    /// A 403 is not included: the server answers it to a valid token that
    /// lacks board rank for the association, which is a per-view error.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

/// Decode a JSON response body into `T`, failing closed on any shape mismatch.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] carrying the serde message when the body
/// is not valid JSON, misses a required field, or carries an unknown one.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Validation(e.to_string()))
}
