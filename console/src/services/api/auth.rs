//! # Authentication Endpoints
//!
//! Handles login and registration. Storing the returned session is the
//! caller's job (see [`SessionStore::set_session`](crate::core::SessionStore::set_session)).

use serde_json::Value;
use shared::{LoginRequest, LoginResult, UserInfo};

use super::client::ApiClient;
use crate::core::Result;

/// Login with username and password.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResult> {
    tracing::info!("Attempting login");
    let result: LoginResult = client.post("/login", request).await?;
    tracing::info!("Login successful");
    Ok(result)
}

/// Register a new back-office user.
pub async fn register(client: &ApiClient, user: &UserInfo) -> Result<Value> {
    client.post("/register", user).await
}
