//! Authenticated routes relaying journal and profile data.
use actix_web::{
    web::{self, Json, ServiceConfig},
    HttpResponse,
};
use drivebook::{
    journal::{self, SaveOutcome},
    userinfo, Drive,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{auth::Authenticated, errors::AppError, routes::Message, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJournal {
    journal_data: Value,
}

pub async fn save_journal(
    auth: Authenticated,
    body: Json<SaveJournal>,
) -> AppResult<HttpResponse> {
    let drive = Drive::new(auth.0.access_token);

    match journal::save(&drive, &body.journal_data)
        .await
        .map_err(AppError::save)?
    {
        SaveOutcome::Updated => Ok(HttpResponse::Ok().json(Message {
            message: "Journal updated successfully.",
        })),
        SaveOutcome::Created => Ok(HttpResponse::Created().json(Message {
            message: "Journal saved successfully.",
        })),
    }
}

pub async fn load_journal(auth: Authenticated) -> AppResult<HttpResponse> {
    let drive = Drive::new(auth.0.access_token);

    let document = journal::load(&drive).await.map_err(AppError::load)?;

    Ok(HttpResponse::Ok().json(document))
}

pub async fn user_profile(auth: Authenticated) -> AppResult<HttpResponse> {
    let profile = userinfo::fetch(&auth.0.access_token)
        .await
        .map_err(AppError::profile)?;

    Ok(HttpResponse::Ok().json(profile))
}

pub fn config(cfg: &mut ServiceConfig) {
    cfg.service(web::resource("/save-journal").route(web::post().to(save_journal)))
        .service(web::resource("/load-journal").route(web::get().to(load_journal)))
        .service(web::resource("/user-profile").route(web::get().to(user_profile)));
}
