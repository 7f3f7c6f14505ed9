use reqwest::StatusCode;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by API calls.
///
/// Every failure is reported to the immediate caller; nothing is retried and
/// no error is swallowed into an empty success value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request URL could not be built. No network call was made.
    #[error("invalid request URL: {url}")]
    InvalidUrl { url: String },

    /// The network call itself failed (connect, TLS, timeout).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the call and reported a structured error.
    ///
    /// Carries the first entry of the `{"errors": [...]}` envelope.
    #[error("API error: {0}")]
    Api(ApiError),

    /// A non-success status whose body was not a decodable error envelope.
    #[error("unexpected HTTP status {status}")]
    Status { status: StatusCode, body: String },

    /// A success response whose body did not match the expected JSON shape.
    ///
    /// The raw body text is retained to aid debugging.
    #[error("failed to decode response body")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}
