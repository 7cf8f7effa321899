//! The authenticated user's profile, relayed verbatim.
use reqwest::{header, Client};
use serde_json::Value;
use tracing::instrument;

use crate::api::read_json;

/// Google userinfo endpoint.
pub const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Fetch the profile of the user the access token belongs to.
///
/// The profile is an opaque JSON object; nothing in it is interpreted.
///
/// # Errors
///
/// Errors on network failure or if the token is rejected.
#[instrument(skip_all)]
pub async fn fetch(access_token: &str) -> crate::Result<Value> {
    let res = Client::new()
        .get(USERINFO_URL)
        .header(header::AUTHORIZATION, format!("Bearer {access_token}"))
        .send()
        .await?;

    Ok(read_json(res).await??)
}
