//! Error taxonomy for the fetch client.
//!
//! One variant per failure class:
//! - [`ApiError::EncodingFailed`]: local request-body serialization; terminal.
//! - [`ApiError::ConnectionFailed`]: transport-level, with a [`ConnectionReason`].
//! - [`ApiError::DecodeFailed`]: body structurally undecodable.
//! - [`ApiError::Api`]: well-formed non-success response from the server.
//!
//! This layer never retries. Every failure is surfaced to the immediate
//! caller; retry policy, if any, belongs to the caller.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::envelope::ApiErrorBody;

/// HTTP status outside the 2xx range, bucketed by origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpBucket {
    /// 4xx and other non-success, non-5xx statuses.
    Client(u16),
    /// 5xx statuses.
    Server(u16),
}

impl HttpBucket {
    pub fn from_status(status: u16) -> Self {
        if status >= 500 {
            HttpBucket::Server(status)
        } else {
            HttpBucket::Client(status)
        }
    }

    /// The raw status code, whichever bucket it landed in.
    pub fn status(self) -> u16 {
        match self {
            HttpBucket::Client(code) | HttpBucket::Server(code) => code,
        }
    }
}

impl fmt::Display for HttpBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpBucket::Client(code) => write!(f, "client error ({code})"),
            HttpBucket::Server(code) => write!(f, "server error ({code})"),
        }
    }
}

/// Why the transport leg of a request failed.
#[derive(Error, Debug)]
pub enum ConnectionReason {
    #[error("not connected to the internet")]
    NotConnectedToInternet,

    #[error("request timed out")]
    TimedOut,

    #[error("http status: {0}")]
    HttpCode(HttpBucket),

    #[error("transport error: {0}")]
    Other(#[source] reqwest::Error),
}

/// Errors surfaced by [`crate::client::ApiClient`] and any other
/// [`crate::client::Transport`] implementation.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be serialized. Local and terminal.
    #[error("request encoding failed: {0}")]
    EncodingFailed(#[source] serde_json::Error),

    /// The request never produced a usable HTTP response body.
    #[error("connection failed: {0}")]
    ConnectionFailed(ConnectionReason),

    /// The body was not a decodable envelope and not an error payload either.
    #[error("response decoding failed: {0}")]
    DecodeFailed(#[source] serde_json::Error),

    /// The server answered with a non-success message code.
    #[error("api error: {}", .0.display_message())]
    Api(ApiErrorBody),
}

impl ApiError {
    /// Field validation errors, when this is a validation-coded API error.
    pub fn validation_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            ApiError::Api(body) => body.validation_errors(),
            _ => None,
        }
    }

    /// The server-side message code, for API errors.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            ApiError::Api(body) => Some(body.msg_code.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_bucket_at_500() {
        assert_eq!(HttpBucket::from_status(404), HttpBucket::Client(404));
        assert_eq!(HttpBucket::from_status(499), HttpBucket::Client(499));
        assert_eq!(HttpBucket::from_status(500), HttpBucket::Server(500));
        assert_eq!(HttpBucket::from_status(503), HttpBucket::Server(503));
        assert_eq!(HttpBucket::from_status(503).status(), 503);
    }

    #[test]
    fn api_error_display_uses_the_display_message() {
        let error = ApiError::Api(ApiErrorBody {
            msg_code: "M-9299".to_string(),
            msg_content: Some("maintenance".to_string()),
            ..Default::default()
        });
        assert_eq!(error.to_string(), "api error: maintenance(M-9299)");
        assert_eq!(error.api_code(), Some("M-9299"));
    }

    #[test]
    fn validation_errors_pass_through_only_for_api_errors() {
        let timeout = ApiError::ConnectionFailed(ConnectionReason::TimedOut);
        assert!(timeout.validation_errors().is_none());
        assert_eq!(timeout.api_code(), None);
    }
}
