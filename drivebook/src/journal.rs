//! The journal: one JSON document stored as a single file in Drive.
//!
//! The file is found by name before every operation; its id is never
//! cached. If duplicates exist, the first one listed wins.
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    drive::{Files, RemoteFile},
    errors::Error,
};

/// Name of the journal file in Drive.
pub const FILE_NAME: &str = "Faynalytics_Journal.json";

/// MIME type of the journal file.
pub const MIME: &str = "application/json";

/// What a save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No journal existed, so one was created.
    Created,
    /// An existing journal was overwritten.
    Updated,
}

/// Find the journal file.
///
/// # Errors
///
/// Errors if the listing query fails.
#[instrument(skip(files))]
pub async fn find(files: &impl Files) -> crate::Result<Option<RemoteFile>> {
    files.find_by_name(FILE_NAME).await
}

/// Save the document, creating the journal file if it doesn't exist yet
/// and overwriting it otherwise.
///
/// # Errors
///
/// Errors on any listing, create or update failure.
#[instrument(skip_all)]
pub async fn save(files: &impl Files, document: &Value) -> crate::Result<SaveOutcome> {
    let json = serde_json::to_string_pretty(document)?;

    match find(files).await? {
        Some(file) => {
            files.update(&file.id, MIME, json).await?;

            debug!(id = %file.id, "updated journal");

            Ok(SaveOutcome::Updated)
        }
        None => {
            let file = files.create(FILE_NAME, MIME, json).await?;

            debug!(id = %file.id, "created journal");

            Ok(SaveOutcome::Created)
        }
    }
}

/// Load the stored document.
///
/// # Errors
///
/// [`Error::NotFound`] if no journal file exists; otherwise errors on
/// listing or download failure, or if the content isn't JSON.
#[instrument(skip_all)]
pub async fn load(files: &impl Files) -> crate::Result<Value> {
    let file = find(files).await?.ok_or(Error::NotFound)?;

    let content = files.download(&file.id).await?;

    Ok(serde_json::from_str(&content)?)
}
