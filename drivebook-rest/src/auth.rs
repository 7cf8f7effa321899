//! Request guard for routes that talk to Google on the user's behalf.
use std::future::{ready, Ready};

use actix_web::{dev::Payload, web::Data, FromRequest, HttpRequest};
use drivebook::{TokenPair, TokenStore};

use crate::errors::AppError;

/// Extractor resolving to the current [`TokenPair`]. Rejects the request
/// with `401 Unauthorized` if nobody has logged in yet; token validity is
/// not checked beyond presence.
#[derive(Debug)]
pub struct Authenticated(pub TokenPair);

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = req
            .app_data::<Data<TokenStore>>()
            .expect("token store is not configured");

        ready(
            store
                .get()
                .map(Authenticated)
                .ok_or(AppError::Unauthenticated),
        )
    }
}
