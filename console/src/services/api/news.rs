//! # News Endpoints

use serde_json::Value;
use shared::{News, NewsInsert, NewsPage, NewsPatch, NewsQuery};

use super::client::ApiClient;
use crate::core::Result;

/// One page of news, filtered by `query`.
#[tracing::instrument(skip(client))]
pub async fn list_news(client: &ApiClient, query: &NewsQuery) -> Result<NewsPage> {
    let page: NewsPage = client.get_with("/news", query).await?;
    tracing::debug!(
        count = page.items.len(),
        total = page.pagination.total_count,
        "News page fetched"
    );
    Ok(page)
}

pub async fn create_news(client: &ApiClient, news: &NewsInsert) -> Result<News> {
    client.post("/news", news).await
}

pub async fn update_news(client: &ApiClient, id: i64, patch: &NewsPatch) -> Result<News> {
    client.put(&format!("/news/{id}"), patch).await
}

pub async fn delete_news(client: &ApiClient, id: i64) -> Result<Value> {
    client.delete(&format!("/news/{id}")).await
}
