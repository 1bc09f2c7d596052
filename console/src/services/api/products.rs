//! # Product Endpoints
//!
//! The search result shape varies with the filters (a single product by id,
//! or a page of products), so it is returned as raw JSON.

use serde_json::Value;
use shared::{Product, ProductForm, ProductPatch, ProductQuery};

use super::client::ApiClient;
use crate::core::Result;

#[tracing::instrument(skip(client))]
pub async fn search_products(client: &ApiClient, query: &ProductQuery) -> Result<Value> {
    client.get_with("/products", query).await
}

pub async fn add_product(client: &ApiClient, form: &ProductForm) -> Result<Product> {
    client.post("/products", form).await
}

pub async fn update_product(client: &ApiClient, id: i64, patch: &ProductPatch) -> Result<Product> {
    client.put(&format!("/products?id={id}"), patch).await
}

pub async fn delete_product(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/products?id={id}")).await
}
