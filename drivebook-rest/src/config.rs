use std::{fmt::Debug, str::FromStr};

use drivebook::OAuth2Client;

/// OAuth2 redirect URI. Must match the one registered in the Google Cloud
/// console.
pub const REDIRECT_URI: &str = "http://localhost:5000/google/callback";

/// Where the browser is sent after a successful login.
pub const FRONTEND_SUCCESS_URI: &str = "http://localhost:5173/settings?status=success";

/// Scopes requested during consent: file-scoped Drive access plus the
/// basic profile.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/userinfo.profile",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: env("GOOGLE_CLIENT_ID"),
            client_secret: env("GOOGLE_CLIENT_SECRET"),
            port: env_opt("PORT").unwrap_or(5000),
        }
    }
}

impl AppConfig {
    pub fn test() -> Self {
        Self {
            client_id: "test-client-id".into(),
            client_secret: "test-client-secret".into(),
            port: 5000,
        }
    }

    pub fn oauth_client(&self) -> OAuth2Client {
        OAuth2Client::new(
            self.client_id.clone(),
            self.client_secret.clone(),
            REDIRECT_URI,
        )
    }
}

/// Get an environment variable.
///
/// # Panics
///
/// If the environment variable isn't set or cannot be properly
/// parsed, this function panics.
#[track_caller]
pub fn env<T>(key: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    env_opt(key).unwrap_or_else(|| panic!("`{key}` was not set"))
}

/// Get an environment variable, or return `None` if it isn't set.
///
/// # Panics
///
/// If the environment variable exists but cannot be parsed, this
/// function panics.
#[track_caller]
pub fn env_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    dotenv::var(key).ok().map(|s| {
        s.parse()
            .unwrap_or_else(|e| panic!("`{key}` was defined but could not be parsed: {e:?}"))
    })
}
