//! Helpers for the Google REST APIs.
use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize};

/// Error envelope returned by the Drive and userinfo APIs on errors.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// The error itself.
    pub error: ApiErrorDetail,
}

/// Contents of an [`ApiErrorBody`].
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// HTTP status code of the error.
    pub code: u16,
    /// Error message.
    pub message: String,
    /// Machine-readable status, e.g. `PERMISSION_DENIED`. Not always present.
    pub status: Option<String>,
}

/// Error body returned by the OAuth2 token endpoint, e.g. when exchanging
/// an expired authorization code.
#[derive(Debug, Deserialize)]
pub struct TokenErrorBody {
    /// Error code, e.g. `invalid_grant`.
    pub error: String,
    /// Human-readable description.
    pub error_description: Option<String>,
}

/// Parse JSON as the associated type if the response has a 2xx status
/// code, otherwise parse it as [`ApiErrorBody`].
///
/// # Errors
///
/// - invalid json
/// - malformed json
pub async fn read_json<T: DeserializeOwned>(
    res: Response,
) -> reqwest::Result<Result<T, ApiErrorBody>> {
    if res.status().is_success() {
        res.json().await.map(Ok)
    } else {
        res.json().await.map(Err)
    }
}

/// Parse JSON as the associated type if the response has a 2xx status
/// code, otherwise parse it as [`TokenErrorBody`].
///
/// # Errors
///
/// - invalid json
/// - malformed json
pub async fn read_token_json<T: DeserializeOwned>(
    res: Response,
) -> reqwest::Result<Result<T, TokenErrorBody>> {
    if res.status().is_success() {
        res.json().await.map(Ok)
    } else {
        res.json().await.map(Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_error_body_parses() {
        let json = r#"{
            "error": {
                "code": 404,
                "message": "File not found: abc123.",
                "errors": [{"message": "File not found: abc123.", "reason": "notFound"}]
            }
        }"#;

        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, 404);
        assert_eq!(body.error.message, "File not found: abc123.");
        assert!(body.error.status.is_none());
    }

    #[test]
    fn token_error_body_parses() {
        let json = r#"{
            "error": "invalid_grant",
            "error_description": "Malformed auth code."
        }"#;

        let body: TokenErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "invalid_grant");
        assert_eq!(body.error_description.as_deref(), Some("Malformed auth code."));
    }
}
