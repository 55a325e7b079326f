use reqwest::StatusCode;

/// Error type for everything that can go wrong while retrieving the user list.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),
    /// The request never produced a response, originating from `reqwest`.
    #[error("request to user directory failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status code.
    #[error("user directory answered with status {0}")]
    Status(StatusCode),
    /// The response body is not a list of users, originating from `reqwest`.
    #[error("failed to decode user list: {0}")]
    Decode(#[source] reqwest::Error),
}
