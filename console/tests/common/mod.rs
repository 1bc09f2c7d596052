//! Stub back-office server and test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use admin_console::core::NotificationSink;
use admin_console::services::api::{ApiClient, ClientConfig};
use admin_console::services::notifier::Notification;
use admin_console::services::session::MemorySessionStore;
use axum::extract::{Multipart, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Headers the stub saw, per request, in arrival order.
#[derive(Clone, Default)]
pub struct Seen {
    pub authorization: Arc<Mutex<Vec<Option<String>>>>,
    pub content_type: Arc<Mutex<Vec<Option<String>>>>,
}

impl Seen {
    fn record(&self, headers: &HeaderMap) {
        let text = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.authorization.lock().push(text(header::AUTHORIZATION));
        self.content_type.lock().push(text(header::CONTENT_TYPE));
    }
}

pub struct TestServer {
    pub origin: String,
    pub seen: Seen,
}

impl TestServer {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_origin(self.origin.clone())
    }
}

/// Collects notifications.
#[derive(Default)]
pub struct Recorder {
    seen: Mutex<Vec<Notification>>,
}

impl NotificationSink for Recorder {
    fn show(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

impl Recorder {
    pub fn messages(&self) -> Vec<String> {
        self.seen.lock().iter().map(|n| n.message.clone()).collect()
    }
}

pub fn client(config: ClientConfig, session: Arc<MemorySessionStore>, sink: Arc<Recorder>) -> ApiClient {
    ApiClient::builder(config)
        .session(session)
        .notifier(sink)
        .build()
        .expect("client should build")
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({"code": 200, "data": data, "message": "ok"}))
}

async fn banners(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    seen.record(&headers);
    ok(json!([{
        "id": 1,
        "title": "Spring",
        "subtitle": "Sale",
        "description": "Up to 50% off",
        "buttonText": "Shop",
        "buttonLink": "/shop",
        "type": "image",
        "media": "/media/spring.png",
        "status": "active"
    }]))
}

async fn expired(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    seen.record(&headers);
    Json(json!({"code": 401, "data": null, "message": "expired"}))
}

async fn forbidden(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    seen.record(&headers);
    (StatusCode::FORBIDDEN, Json(json!({"code": 403, "message": "no access to this brand"})))
}

async fn unauthorized(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    seen.record(&headers);
    (StatusCode::UNAUTHORIZED, Json(json!({"message": "token revoked"})))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    ok(Value::Null)
}

async fn echo_query(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    ok(json!(query))
}

async fn update_brand(Query(query): Query<HashMap<String, String>>, Json(body): Json<Value>) -> Json<Value> {
    let id: i64 = query.get("id").and_then(|v| v.parse().ok()).unwrap_or_default();
    ok(json!({"id": id, "name": body["name"]}))
}

async fn login(Json(body): Json<Value>) -> Json<Value> {
    if body["password"] == "secret" {
        ok(json!({
            "token": "issued-token",
            "userInfo": {"id": 1, "username": body["username"], "permissions": ["banner:edit"]}
        }))
    } else {
        Json(json!({"code": 400, "data": null, "message": "用户名或密码错误"}))
    }
}

async fn upload(State(seen): State<Seen>, headers: HeaderMap, mut multipart: Multipart) -> Json<Value> {
    seen.record(&headers);
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        fields.push(json!({"field": name, "fileName": file_name, "contentType": content_type, "size": size}));
    }
    ok(json!({"url": "/uploads/logo.png", "fields": fields}))
}

/// Serve the stub API on an ephemeral port under `/api/admin`.
pub async fn spawn_server() -> TestServer {
    let seen = Seen::default();
    let api = Router::new()
        .route("/banners", get(banners))
        .route("/news", get(expired))
        .route("/brands", get(forbidden).put(update_brand))
        .route("/collaborations", get(unauthorized))
        .route("/main-categories", get(echo_query))
        .route("/products", get(echo_query))
        .route("/slow", get(slow))
        .route("/login", post(login))
        .route("/upload", post(upload))
        .with_state(seen.clone());
    let app = Router::new().nest("/api/admin", api);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    TestServer {
        origin: format!("http://{addr}"),
        seen,
    }
}
