use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::routes::Message;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not authenticated. Please connect to Google Drive first.")]
    Unauthenticated,
    #[error("No journal found on Google Drive.")]
    NoJournal,
    #[error("Authentication failed")]
    AuthFailed,
    #[error("Failed to save journal")]
    SaveFailed,
    #[error("Failed to load journal")]
    LoadFailed,
    #[error("Failed to fetch user profile")]
    ProfileFailed,
}

impl AppError {
    pub(crate) fn auth(e: drivebook::Error) -> Self {
        error!("authentication failed: {e}");
        Self::AuthFailed
    }

    pub(crate) fn save(e: drivebook::Error) -> Self {
        error!("failed to save journal: {e}");
        Self::SaveFailed
    }

    pub(crate) fn load(e: drivebook::Error) -> Self {
        match e {
            drivebook::Error::NotFound => Self::NoJournal,
            e => {
                error!("failed to load journal: {e}");
                Self::LoadFailed
            }
        }
    }

    pub(crate) fn profile(e: drivebook::Error) -> Self {
        error!("failed to fetch user profile: {e}");
        Self::ProfileFailed
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::NoJournal => StatusCode::NOT_FOUND,
            AppError::AuthFailed
            | AppError::SaveFailed
            | AppError::LoadFailed
            | AppError::ProfileFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NoJournal => {
                let message = self.to_string();
                HttpResponse::NotFound().json(Message { message: &message })
            }
            _ => HttpResponse::build(self.status_code()).body(self.to_string()),
        }
    }
}
