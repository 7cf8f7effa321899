use thiserror::Error;

use crate::api::{ApiErrorBody, TokenErrorBody};

/// Error used by the entire drivebook crate.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP error.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Url error.
    #[error("invalid url")]
    Url(#[from] url::ParseError),

    /// Upstream Google error. Might be due to a client error.
    #[error("google error")]
    Google(ApiResError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// No journal file exists in Drive.
    #[error("no journal file exists")]
    NotFound,
}

/// All possible error bodies returned by the upstream Google APIs.
#[derive(Debug)]
pub enum ApiResError {
    /// Error envelope returned by the Drive and userinfo endpoints.
    Api(ApiErrorBody),
    /// Error returned by the OAuth2 token endpoint.
    Token(TokenErrorBody),
}

impl From<ApiErrorBody> for Error {
    fn from(e: ApiErrorBody) -> Self {
        Self::Google(ApiResError::Api(e))
    }
}

impl From<TokenErrorBody> for Error {
    fn from(e: TokenErrorBody) -> Self {
        Self::Google(ApiResError::Token(e))
    }
}
