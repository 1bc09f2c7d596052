//! # API Client
//!
//! Main HTTP client for back-office API communication. Every call goes through
//! the same [`Pipeline`]: token injection on the way out, envelope unwrapping,
//! status classification, session invalidation and notification on the way back.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use super::config::ClientConfig;
use super::interceptors::{envelope_message, standard_pipeline};
use super::pipeline::{ApiResponse, Pipeline};
use super::request::{encode_error, ApiRequest, FilePart};
use super::status::{FALLBACK_MESSAGE, TIMEOUT_STATUS};
use super::transport::{RawResponse, ReqwestTransport, TransportError};
use crate::core::{ApiError, AppError, HttpTransport, NotificationSink, Result, SessionStore};
use crate::services::notifier::GlobalNotifier;
use crate::services::session::MemorySessionStore;

/// HTTP client for the back-office API.
///
/// Callers never see the `{code, data, message}` envelope: a call resolves to
/// the payload or fails with an [`ApiError`] whose text is ready to show.
/// The client is `Send + Sync`; wrap it in an `Arc` to share it across tasks.
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    pipeline: Pipeline,
}

/// Assembles an [`ApiClient`].
///
/// Unset parts default to an empty [`MemorySessionStore`], the process-wide
/// [`GlobalNotifier`], a [`ReqwestTransport`] and the standard pipeline.
pub struct ApiClientBuilder {
    config: ClientConfig,
    session: Option<Arc<dyn SessionStore>>,
    sink: Option<Arc<dyn NotificationSink>>,
    transport: Option<Arc<dyn HttpTransport>>,
    pipeline: Option<Pipeline>,
}

impl ApiClientBuilder {
    pub fn session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn notifier(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the standard chain. `session` and `notifier` are then unused.
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    pub fn build(self) -> std::result::Result<ApiClient, AppError> {
        HeaderValue::from_str(&self.config.content_type)
            .map_err(|e| AppError::Config(format!("content type {:?}: {e}", self.config.content_type)))?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };
        let pipeline = match self.pipeline {
            Some(pipeline) => pipeline,
            None => standard_pipeline(
                self.session.unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
                self.sink.unwrap_or_else(|| Arc::new(GlobalNotifier)),
            ),
        };

        tracing::debug!(
            base_url = %self.config.base_url,
            timeout_ms = self.config.timeout.as_millis(),
            pipeline = ?pipeline,
            "API client built"
        );

        Ok(ApiClient {
            config: self.config,
            transport,
            pipeline,
        })
    }
}

impl ApiClient {
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            session: None,
            sink: None,
            transport: None,
            pipeline: None,
        }
    }

    /// Client with the reqwest transport and standard pipeline over `session`,
    /// reporting to the process-wide notifier.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> std::result::Result<Self, AppError> {
        Self::builder(config).session(session).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::get(path)).await
    }

    /// `GET path` with `params` as the query string.
    pub async fn get_with<T, Q>(&self, path: &str, params: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::get(path).query(params);
        self.send_built(request).await
    }

    /// `POST path` with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_built(ApiRequest::post(path).json(body)).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_built(ApiRequest::put(path).json(body)).await
    }

    /// `DELETE path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::delete(path)).await
    }

    /// `POST path` with `file` as multipart field `file`.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: FilePart) -> Result<T> {
        self.send(ApiRequest::upload(path, file)).await
    }

    /// Send a fully described request and decode the payload.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let payload = self.execute(request).await?;
        serde_json::from_value(payload).map_err(|e| {
            tracing::error!(error = %e, "Payload did not match the expected type");
            self.pipeline.reject(ApiError::Decode {
                message: FALLBACK_MESSAGE.to_string(),
                detail: e.to_string(),
            })
        })
    }

    /// Send a request and return the raw payload.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let span = tracing::info_span!(
            "api_request",
            request_id = %Uuid::new_v4(),
            method = %request.method,
            path = %request.path,
        );

        async move {
            let start = Instant::now();
            let request = self.apply_defaults(request);

            let outcome = match self.pipeline.before_send(request) {
                Ok(request) => self.dispatch(request).await,
                Err(error) => Err(error),
            };
            let outcome = self.pipeline.after_receive(outcome);

            let duration_ms = start.elapsed().as_millis();
            match &outcome {
                Ok(response) => tracing::debug!(status = response.status.as_u16(), duration_ms, "Request succeeded"),
                Err(error) => tracing::warn!(error = %error, status = ?error.status(), code = ?error.code(), duration_ms, "Request failed"),
            }
            outcome.map(|response| response.body)
        }
        .instrument(span)
        .await
    }

    async fn send_built<T: DeserializeOwned>(&self, request: Result<ApiRequest>) -> Result<T> {
        match request {
            Ok(request) => self.send(request).await,
            // Encoding failures are reported like any other failed call.
            Err(error) => Err(self.pipeline.reject(error)),
        }
    }

    fn apply_defaults(&self, mut request: ApiRequest) -> ApiRequest {
        if !request.headers.contains_key(CONTENT_TYPE) {
            if let Ok(value) = HeaderValue::from_str(&self.config.content_type) {
                request.headers.insert(CONTENT_TYPE, value);
            }
        }
        request.timeout.get_or_insert(self.config.timeout);
        request
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.config.resolve_url(&request.path);
        tracing::debug!(url = %url, "Sending request");

        match self.transport.send(url, request).await {
            Ok(raw) => classify_response(raw),
            Err(TransportError::TimedOut) => {
                tracing::error!("Request timed out");
                Err(ApiError::Status {
                    status: TIMEOUT_STATUS,
                    message: FALLBACK_MESSAGE.to_string(),
                })
            }
            Err(TransportError::Unreachable(detail)) => {
                tracing::error!(error = %detail, "No response from server");
                Err(ApiError::Network { message: detail })
            }
            Err(TransportError::Build(detail)) => Err(encode_error(detail)),
        }
    }
}

/// 2xx → fulfilled with the parsed body; anything else → a status failure
/// carrying the server's message, if it sent one.
fn classify_response(raw: RawResponse) -> Result<ApiResponse> {
    let body = parse_body(&raw.body);
    if raw.status.is_success() {
        return Ok(ApiResponse {
            status: raw.status,
            headers: raw.headers,
            body,
        });
    }

    Err(ApiError::Status {
        status: raw.status.as_u16(),
        message: envelope_message(&body).unwrap_or(FALLBACK_MESSAGE).to_string(),
    })
}

/// JSON when the body parses, the text itself otherwise, `null` when empty.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
