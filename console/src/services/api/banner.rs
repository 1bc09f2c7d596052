//! # Banner Endpoints

use serde_json::Value;
use shared::{Banner, BannerPatch};

use super::client::ApiClient;
use crate::core::Result;

pub async fn list_banners(client: &ApiClient) -> Result<Vec<Banner>> {
    client.get("/banners").await
}

pub async fn get_banner(client: &ApiClient, id: i64) -> Result<Banner> {
    client.get(&format!("/banners/{id}")).await
}

pub async fn add_banner(client: &ApiClient, banner: &Banner) -> Result<Banner> {
    client.post("/banners", banner).await
}

pub async fn update_banner(client: &ApiClient, id: i64, patch: &BannerPatch) -> Result<Banner> {
    client.put(&format!("/banners/{id}"), patch).await
}

pub async fn delete_banner(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/banners/{id}")).await
}
