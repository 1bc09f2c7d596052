//! # Collaboration Endpoints

use serde_json::Value;
use shared::{Collaboration, CollaborationPatch};

use super::client::ApiClient;
use crate::core::Result;

pub async fn list_collaborations(client: &ApiClient) -> Result<Vec<Collaboration>> {
    client.get("/collaborations").await
}

pub async fn get_collaboration(client: &ApiClient, id: i64) -> Result<Collaboration> {
    client.get(&format!("/collaborations/{id}")).await
}

pub async fn add_collaboration(client: &ApiClient, collaboration: &Collaboration) -> Result<Collaboration> {
    client.post("/collaborations", collaboration).await
}

pub async fn update_collaboration(
    client: &ApiClient,
    id: i64,
    patch: &CollaborationPatch,
) -> Result<Collaboration> {
    client.put(&format!("/collaborations/{id}"), patch).await
}

pub async fn delete_collaboration(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/collaborations/{id}")).await
}
