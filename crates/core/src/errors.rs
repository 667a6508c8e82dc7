//! Core error types for the dashboard services.

use thiserror::Error;

use rielbank_api_client::ApiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard domain layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A fetch through the API client failed; see [`ApiError`] for the class.
    #[error("api client error: {0}")]
    Client(#[from] ApiError),
}

impl Error {
    /// The server-side message code, when the failure was a logical API error.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Client(err) => err.api_code(),
        }
    }
}
