//! # Upload Endpoint

use serde_json::Value;

use super::client::ApiClient;
use super::request::FilePart;
use crate::core::Result;

/// Upload an image; the payload describes the stored file (typically its URL).
#[tracing::instrument(skip(client, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
pub async fn upload_image(client: &ApiClient, file: FilePart) -> Result<Value> {
    client.upload("/upload", file).await
}
