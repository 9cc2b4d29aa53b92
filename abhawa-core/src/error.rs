use thiserror::Error;

/// Everything that can go wrong while acquiring live weather data.
///
/// None of these variants ever reach the caller of `acquire`: they are
/// logged at the fallback boundary and swallowed there.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The request could not be sent or the transport gave up on it.
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("weather provider returned status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("malformed weather payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The response parsed but lacked a field we need.
    #[error("weather payload missing {0}")]
    MissingField(&'static str),
}
