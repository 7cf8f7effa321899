//! OAuth2 authorization-code flow and the process-wide token slot.
use std::sync::{Arc, RwLock};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::api::read_token_json;

/// Google OAuth2 consent endpoint.
pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google OAuth2 token endpoint.
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Access and refresh tokens issued by a code exchange.
///
/// `refresh_token` is optional since Google omits it when the user has
/// granted consent before.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token sent as a bearer credential.
    pub access_token: String,
    /// Long-lived refresh token, if one was issued.
    pub refresh_token: Option<String>,
}

/// An OAuth2 client for the authorization-code flow.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    // expires_in is returned too, but tokens are used as-is until they stop
    // working; nothing tracks expiry.
}

impl OAuth2Client {
    /// Construct a new client from static configuration.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            http: Client::new(),
        }
    }

    /// Build the consent URL to send the browser to. Requests offline
    /// access so that a refresh token is issued.
    ///
    /// # Panics
    ///
    /// Panics if [`AUTH_URL`] is not a valid url.
    #[must_use]
    pub fn consent_url(&self, scopes: &[&str]) -> Url {
        let mut url = Url::parse(AUTH_URL).unwrap();

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("access_type", "offline")
            .append_pair("scope", &scopes.join(" "));

        url
    }

    /// Exchange an authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Fails if the code is invalid, expired or already used, or on
    /// network errors.
    #[instrument(skip_all)]
    pub async fn exchange_code(&self, code: &str) -> crate::Result<TokenPair> {
        #[derive(Serialize)]
        struct Params<'a> {
            grant_type: &'static str,
            code: &'a str,
            client_id: &'a str,
            client_secret: &'a str,
            redirect_uri: &'a str,
        }

        let res = self
            .http
            .post(TOKEN_URL)
            .form(&Params {
                grant_type: "authorization_code",
                code,
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                redirect_uri: &self.redirect_uri,
            })
            .send()
            .await?;

        let res: TokenResponse = read_token_json(res).await??;

        debug!(
            has_refresh_token = res.refresh_token.is_some(),
            "exchanged authorization code"
        );

        Ok(TokenPair {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
        })
    }
}

/// Process-wide slot holding the most recently obtained [`TokenPair`].
///
/// Single-tenant: a new login overwrites the previous one. Nothing is
/// persisted, so a restart empties the slot.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<TokenPair>>>,
}

impl TokenStore {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored tokens unconditionally.
    pub fn set(&self, tokens: TokenPair) {
        *self.inner.write().unwrap() = Some(tokens);
    }

    /// Get the current tokens, if anybody has logged in.
    #[must_use]
    pub fn get(&self) -> Option<TokenPair> {
        self.inner.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OAuth2Client {
        OAuth2Client::new(
            "id-123",
            "s3cret",
            "http://localhost:5000/google/callback",
        )
    }

    #[test]
    fn consent_url_requests_offline_access() {
        let url = client().consent_url(&["scope-a", "scope-b"]);

        assert!(url.as_str().starts_with(AUTH_URL));

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        for (key, value) in [
            ("response_type", "code"),
            ("client_id", "id-123"),
            ("redirect_uri", "http://localhost:5000/google/callback"),
            ("access_type", "offline"),
            ("scope", "scope-a scope-b"),
        ] {
            assert!(
                query.contains(&(key.into(), value.into())),
                "missing query pair `{key}={value}`"
            );
        }
    }

    #[test]
    fn token_store_starts_empty() {
        assert!(TokenStore::new().get().is_none());
    }

    #[test]
    fn token_store_last_login_wins() {
        let store = TokenStore::new();

        store.set(TokenPair {
            access_token: "first".into(),
            refresh_token: Some("refresh-1".into()),
        });
        store.set(TokenPair {
            access_token: "second".into(),
            refresh_token: None,
        });

        let tokens = store.get().unwrap();
        assert_eq!(tokens.access_token, "second");
        assert!(tokens.refresh_token.is_none());
    }

    #[test]
    fn token_response_parses_without_refresh_token() {
        let res: TokenResponse = serde_json::from_str(
            r#"{"access_token": "ya29.abc", "expires_in": 3599, "token_type": "Bearer"}"#,
        )
        .unwrap();

        assert_eq!(res.access_token, "ya29.abc");
        assert!(res.refresh_token.is_none());
    }

    #[test]
    fn token_response_parses_with_refresh_token() {
        let res: TokenResponse = serde_json::from_str(
            r#"{"access_token": "ya29.abc", "refresh_token": "1//xyz", "expires_in": 3599}"#,
        )
        .unwrap();

        assert_eq!(res.refresh_token.as_deref(), Some("1//xyz"));
    }
}
