//! # Brand and Category Endpoints
//!
//! Updates and deletes address the record with an `id` query parameter
//! rather than a path segment.

use serde_json::{json, Value};
use shared::{
    Brand, BrandInput, CategoryTreeNode, MainCategory, MainCategoryInput, SubCategory, SubCategoryInput,
};

use super::client::ApiClient;
use crate::core::Result;

// ==================== BRANDS ====================

pub async fn list_brands(client: &ApiClient) -> Result<Vec<Brand>> {
    client.get("/brands").await
}

pub async fn add_brand(client: &ApiClient, input: &BrandInput) -> Result<Brand> {
    client.post("/brands", input).await
}

pub async fn update_brand(client: &ApiClient, id: i64, input: &BrandInput) -> Result<Brand> {
    client.put(&format!("/brands?id={id}"), input).await
}

pub async fn delete_brand(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/brands?id={id}")).await
}

// ==================== MAIN CATEGORIES ====================

/// Main categories, optionally only those of one brand.
pub async fn list_main_categories(client: &ApiClient, brand_id: Option<i64>) -> Result<Vec<MainCategory>> {
    client.get_with("/main-categories", &json!({ "brandId": brand_id })).await
}

pub async fn add_main_category(client: &ApiClient, input: &MainCategoryInput) -> Result<MainCategory> {
    client.post("/main-categories", input).await
}

pub async fn update_main_category(client: &ApiClient, id: i64, input: &MainCategoryInput) -> Result<MainCategory> {
    client.put(&format!("/main-categories?id={id}"), input).await
}

pub async fn delete_main_category(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/main-categories?id={id}")).await
}

// ==================== SUB CATEGORIES ====================

/// Sub categories, optionally only those of one main category.
pub async fn list_sub_categories(client: &ApiClient, main_category_id: Option<i64>) -> Result<Vec<SubCategory>> {
    client
        .get_with("/sub-categories", &json!({ "mainCategoryId": main_category_id }))
        .await
}

pub async fn add_sub_category(client: &ApiClient, input: &SubCategoryInput) -> Result<SubCategory> {
    client.post("/sub-categories", input).await
}

pub async fn update_sub_category(client: &ApiClient, id: i64, input: &SubCategoryInput) -> Result<SubCategory> {
    client.put(&format!("/sub-categories?id={id}"), input).await
}

pub async fn delete_sub_category(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/sub-categories?id={id}")).await
}

// ==================== TREE ====================

/// Brand → main category → sub category tree for cascading pickers.
pub async fn category_tree(client: &ApiClient) -> Result<Vec<CategoryTreeNode>> {
    client.get("/categories-tree").await
}
