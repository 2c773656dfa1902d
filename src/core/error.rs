use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DexcomError {
    /// The request could not be sent or the response could not be read
    /// (connection failure, TLS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-2xx status code without a recognizable fault body.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned a non-2xx status with a Dexcom fault object in the body.
    #[error("Dexcom fault {code} (HTTP {status}): {message}")]
    Vendor {
        /// The HTTP status code.
        status: u16,
        /// The vendor fault code, e.g. `AccountPasswordInvalid`.
        code: String,
        /// The vendor's human-readable message.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    ResponseParse(String),

    /// The account-id step of the login rejected the credentials or returned an unexpected payload.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The session-id step of the login failed, or the session was rejected on a later read.
    #[error("Session error: {0}")]
    Session(String),

    /// A glucose record was missing a required field or had the wrong type.
    #[error("Malformed glucose reading: {0}")]
    MalformedReading(String),

    /// A single reading was requested but the service returned none.
    #[error("no glucose readings available")]
    NoReadingsAvailable,

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A caller-supplied argument is out of the range the service accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DexcomError {
    /// Returns `true` for network-level failures where retrying the same call may succeed.
    ///
    /// A [`Vendor`](Self::Vendor) fault is the service rejecting the request itself, so it is
    /// not counted here.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    /// Returns `true` when new credentials or a new login are needed.
    #[must_use]
    pub const fn is_credentials(&self) -> bool {
        matches!(self, Self::Authentication(_) | Self::Session(_))
    }
}
