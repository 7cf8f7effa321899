//! The OAuth2 web flow: consent redirect and callback.
use actix_web::{
    http::header,
    web::{self, Data, Query, ServiceConfig},
    HttpResponse,
};
use drivebook::{OAuth2Client, TokenStore};
use serde::Deserialize;

use crate::{
    config::{FRONTEND_SUCCESS_URI, SCOPES},
    errors::AppError,
    AppResult,
};

pub async fn auth(oauth: Data<OAuth2Client>) -> HttpResponse {
    let url = oauth.consent_url(SCOPES);

    HttpResponse::Found()
        .insert_header((header::LOCATION, url.to_string()))
        .finish()
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: String,
}

pub async fn callback(
    oauth: Data<OAuth2Client>,
    tokens: Data<TokenStore>,
    query: Query<CallbackQuery>,
) -> AppResult<HttpResponse> {
    let pair = oauth
        .exchange_code(&query.code)
        .await
        .map_err(AppError::auth)?;

    tokens.set(pair);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, FRONTEND_SUCCESS_URI))
        .finish())
}

pub fn config(cfg: &mut ServiceConfig) {
    cfg.service(web::resource("/auth").route(web::get().to(auth)))
        .service(web::resource("/callback").route(web::get().to(callback)));
}
