//! Thin client for the Drive v3 file API.
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{header, Client, IntoUrl, Method, RequestBuilder, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::{read_json, ApiErrorBody};

/// Boundary separating the metadata and media parts of a multipart upload.
const RELATED_BOUNDARY: &str = "drivebook_boundary";

/// Identity of a file in Drive as returned by a listing query.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteFile {
    /// Opaque file id.
    pub id: String,
    /// File name. Not unique within Drive.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<RemoteFile>,
}

/// Operations against a remote file store.
///
/// [`Drive`] is the production implementation; tests substitute an
/// in-memory one.
#[async_trait]
pub trait Files: Send + Sync {
    /// Find the first file with the given name, if any. Listing order is
    /// decided by the provider.
    async fn find_by_name(&self, name: &str) -> crate::Result<Option<RemoteFile>>;

    /// Create a new file with the given name, MIME type and content.
    async fn create(&self, name: &str, mime: &str, content: String) -> crate::Result<RemoteFile>;

    /// Replace the content of an existing file.
    async fn update(&self, id: &str, mime: &str, content: String) -> crate::Result<RemoteFile>;

    /// Download the raw content of a file.
    async fn download(&self, id: &str) -> crate::Result<String>;
}

/// A Drive API client authorized with a single access token.
///
/// Constructed per call; tokens are attached as-is and never refreshed.
#[derive(Debug)]
pub struct Drive {
    client: Client,
    access_token: String,
}

impl Drive {
    /// Construct a new client around an access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
        }
    }

    fn req_with_token(&self, method: Method, url: impl IntoUrl) -> RequestBuilder {
        self.client.request(method, url).header(
            header::AUTHORIZATION,
            format!("Bearer {}", self.access_token),
        )
    }

    fn files_req(&self, method: Method, path: &str) -> crate::Result<RequestBuilder> {
        static FILES_BASE: Lazy<Url> =
            Lazy::new(|| Url::parse("https://www.googleapis.com/drive/v3/").unwrap());

        let url = FILES_BASE.join(path)?;

        Ok(self.req_with_token(method, url))
    }

    fn upload_req(&self, method: Method, path: &str) -> crate::Result<RequestBuilder> {
        static UPLOAD_BASE: Lazy<Url> =
            Lazy::new(|| Url::parse("https://www.googleapis.com/upload/drive/v3/").unwrap());

        let url = UPLOAD_BASE.join(path)?;

        Ok(self.req_with_token(method, url))
    }
}

/// Build a `q` expression matching files by exact name.
fn name_query(name: &str) -> String {
    format!(
        "name = '{}'",
        name.replace('\\', "\\\\").replace('\'', "\\'")
    )
}

/// Build a `multipart/related` body with a metadata part and a media part.
fn related_body(name: &str, mime: &str, content: &str) -> String {
    let metadata = serde_json::json!({ "name": name, "mimeType": mime });

    format!(
        "--{RELATED_BOUNDARY}\r\n\
         Content-Type: application/json; charset=UTF-8\r\n\r\n\
         {metadata}\r\n\
         --{RELATED_BOUNDARY}\r\n\
         Content-Type: {mime}\r\n\r\n\
         {content}\r\n\
         --{RELATED_BOUNDARY}--"
    )
}

#[async_trait]
impl Files for Drive {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> crate::Result<Option<RemoteFile>> {
        let res = self
            .files_req(Method::GET, "files")?
            .query(&[
                ("q", name_query(name).as_str()),
                ("fields", "files(id,name)"),
            ])
            .send()
            .await?;

        let list: FileList = read_json(res).await??;

        debug!("listed {} matching files", list.files.len());

        Ok(list.files.into_iter().next())
    }

    #[instrument(skip(self, content))]
    async fn create(&self, name: &str, mime: &str, content: String) -> crate::Result<RemoteFile> {
        let res = self
            .upload_req(Method::POST, "files")?
            .query(&[("uploadType", "multipart")])
            .header(
                header::CONTENT_TYPE,
                format!("multipart/related; boundary={RELATED_BOUNDARY}"),
            )
            .body(related_body(name, mime, &content))
            .send()
            .await?;

        Ok(read_json(res).await??)
    }

    #[instrument(skip(self, content))]
    async fn update(&self, id: &str, mime: &str, content: String) -> crate::Result<RemoteFile> {
        let res = self
            .upload_req(Method::PATCH, &format!("files/{id}"))?
            .query(&[("uploadType", "media")])
            .header(header::CONTENT_TYPE, mime.to_owned())
            .body(content)
            .send()
            .await?;

        Ok(read_json(res).await??)
    }

    #[instrument(skip(self))]
    async fn download(&self, id: &str) -> crate::Result<String> {
        let res = self
            .files_req(Method::GET, &format!("files/{id}"))?
            .query(&[("alt", "media")])
            .send()
            .await?;

        if res.status().is_success() {
            Ok(res.text().await?)
        } else {
            let e: ApiErrorBody = res.json().await?;
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_query_quotes_the_name() {
        assert_eq!(name_query("Journal.json"), "name = 'Journal.json'");
    }

    #[test]
    fn name_query_escapes_quotes_and_backslashes() {
        assert_eq!(name_query(r"it's\here"), r"name = 'it\'s\\here'");
    }

    #[test]
    fn related_body_contains_both_parts() {
        let body = related_body("Journal.json", "application/json", "{\"a\":1}");

        assert!(body.starts_with(&format!("--{RELATED_BOUNDARY}\r\n")));
        assert!(body.ends_with(&format!("--{RELATED_BOUNDARY}--")));
        assert!(body.contains("\"name\":\"Journal.json\""));
        assert!(body.contains("\"mimeType\":\"application/json\""));
        assert!(body.contains("Content-Type: application/json\r\n\r\n{\"a\":1}"));
    }

    #[test]
    fn file_list_parses() {
        let list: FileList = serde_json::from_str(
            r#"{"files": [{"id": "abc", "name": "Journal.json"}, {"id": "def", "name": "Journal.json"}]}"#,
        )
        .unwrap();

        assert_eq!(
            list.files.first(),
            Some(&RemoteFile {
                id: "abc".into(),
                name: "Journal.json".into()
            })
        );
    }

    #[test]
    fn empty_file_list_parses() {
        let list: FileList = serde_json::from_str("{}").unwrap();
        assert!(list.files.is_empty());
    }
}
