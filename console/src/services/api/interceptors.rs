//! # Standard Interceptors
//!
//! The stages every [`ApiClient`](super::ApiClient) runs by default, in order:
//!
//! | Stage | Phase | Effect |
//! |---|---|---|
//! | [`BearerAuth`] | request | `Authorization: Bearer <token>` when signed in |
//! | [`EnvelopeUnwrap`] | response | payload out of a 2xx envelope, else reject with its message |
//! | [`StatusClassifier`] | response | fixed text for transport failures |
//! | [`SessionInvalidation`] | response | logout on any 401 |
//! | [`Notify`] | response | every failure message to the notification sink |

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde_json::Value;
use shared::is_success_code;

use super::pipeline::{ApiResponse, Pipeline, RequestInterceptor, ResponseInterceptor};
use super::request::{encode_error, ApiRequest};
use super::status::{status_message, FALLBACK_MESSAGE, NETWORK_ERROR_MESSAGE};
use crate::core::{ApiError, NotificationSink, SessionStore};

/// The default chain.
pub fn standard_pipeline(session: Arc<dyn SessionStore>, sink: Arc<dyn NotificationSink>) -> Pipeline {
    Pipeline::new()
        .with_request(BearerAuth::new(session.clone()))
        .with_response(EnvelopeUnwrap)
        .with_response(StatusClassifier)
        .with_response(SessionInvalidation::new(session))
        .with_response(Notify::new(sink))
}

/// Attaches the session token, replacing any per-call `Authorization` header.
pub struct BearerAuth {
    session: Arc<dyn SessionStore>,
}

impl BearerAuth {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer_auth"
    }

    fn on_request(&self, mut request: ApiRequest) -> Result<ApiRequest, ApiError> {
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(encode_error)?;
            request.headers.insert(AUTHORIZATION, value);
        }
        Ok(request)
    }
}

/// Replaces an envelope with its `data`, or rejects when `code` is not 2xx.
pub struct EnvelopeUnwrap;

impl ResponseInterceptor for EnvelopeUnwrap {
    fn name(&self) -> &'static str {
        "envelope_unwrap"
    }

    fn on_fulfilled(&self, mut response: ApiResponse) -> Result<ApiResponse, ApiError> {
        let code = response.body.get("code").unwrap_or(&Value::Null);
        if !is_success_code(code) {
            let code = code.as_i64();
            let message = envelope_message(&response.body).unwrap_or(FALLBACK_MESSAGE).to_string();
            tracing::warn!(code = ?code, message = %message, "Envelope reported failure");
            return Err(ApiError::Rejected { code, message });
        }

        let data = response
            .body
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null);
        response.body = data;
        Ok(response)
    }
}

/// Non-empty `message` string of a JSON body.
pub(crate) fn envelope_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

/// Gives transport failures their user-facing text.
///
/// Statuses in the fixed table always get the table entry, whatever the body
/// said. Other statuses keep the server message the transport stage attached.
/// Failures without a response get the network-error text.
pub struct StatusClassifier;

impl ResponseInterceptor for StatusClassifier {
    fn name(&self) -> &'static str {
        "status_classifier"
    }

    fn on_rejected(&self, error: ApiError) -> ApiError {
        match error {
            ApiError::Status { status, message } => ApiError::Status {
                status,
                message: status_message(status).map(str::to_string).unwrap_or(message),
            },
            ApiError::Network { .. } => ApiError::Network {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            },
            other => other,
        }
    }
}

/// Clears the session on a 401 from either channel.
pub struct SessionInvalidation {
    session: Arc<dyn SessionStore>,
}

impl SessionInvalidation {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl ResponseInterceptor for SessionInvalidation {
    fn name(&self) -> &'static str {
        "session_invalidation"
    }

    fn on_rejected(&self, error: ApiError) -> ApiError {
        if error.is_unauthorized() {
            tracing::warn!("Unauthorized, clearing session");
            self.session.logout();
        }
        error
    }
}

/// Surfaces every failure message.
pub struct Notify {
    sink: Arc<dyn NotificationSink>,
}

impl Notify {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }
}

impl ResponseInterceptor for Notify {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn on_rejected(&self, error: ApiError) -> ApiError {
        self.sink.error(error.message());
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::MemorySessionStore;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use serde_json::json;
    use shared::UserInfo;

    fn ok(body: Value) -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body,
        }
    }

    fn signed_in() -> Arc<MemorySessionStore> {
        let store = Arc::new(MemorySessionStore::new());
        store.set_session("t0ken".to_string(), UserInfo::default());
        store
    }

    #[test]
    fn test_bearer_auth_with_and_without_token() {
        let store = signed_in();
        let auth = BearerAuth::new(store.clone());

        let request = auth.on_request(ApiRequest::get("/banners")).unwrap();
        assert_eq!(request.headers[AUTHORIZATION], "Bearer t0ken");

        store.logout();
        let request = auth.on_request(ApiRequest::get("/banners")).unwrap();
        assert!(request.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_bearer_auth_replaces_per_call_authorization() {
        let auth = BearerAuth::new(signed_in());
        let request = ApiRequest::get("/banners").header(AUTHORIZATION, HeaderValue::from_static("Basic b2xk"));

        let request = auth.on_request(request).unwrap();
        assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(request.headers[AUTHORIZATION], "Bearer t0ken");
    }

    #[test]
    fn test_per_call_authorization_kept_when_signed_out() {
        let auth = BearerAuth::new(Arc::new(MemorySessionStore::new()));
        let request = ApiRequest::get("/banners").header(AUTHORIZATION, HeaderValue::from_static("Basic b2xk"));

        let request = auth.on_request(request).unwrap();
        assert_eq!(request.headers[AUTHORIZATION], "Basic b2xk");
    }

    #[test]
    fn test_bearer_auth_rejects_unencodable_token() {
        let store = Arc::new(MemorySessionStore::new());
        store.set_session("bad\ntoken".to_string(), UserInfo::default());
        let err = BearerAuth::new(store).on_request(ApiRequest::get("/x")).unwrap_err();
        assert!(matches!(err, ApiError::Encode { .. }));
    }

    #[test]
    fn test_envelope_unwrap_success_returns_data_only() {
        let response = EnvelopeUnwrap
            .on_fulfilled(ok(json!({"code": 201, "data": {"id": 7}, "message": "created"})))
            .unwrap();
        assert_eq!(response.body, json!({"id": 7}));

        let response = EnvelopeUnwrap.on_fulfilled(ok(json!({"code": 200}))).unwrap();
        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn test_envelope_unwrap_failure_uses_message_or_fallback() {
        let err = EnvelopeUnwrap
            .on_fulfilled(ok(json!({"code": 401, "message": "expired"})))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                code: Some(401),
                message: "expired".to_string()
            }
        );

        let err = EnvelopeUnwrap
            .on_fulfilled(ok(json!({"code": 500, "message": ""})))
            .unwrap_err();
        assert_eq!(err.message(), "请求失败");
    }

    #[test]
    fn test_envelope_unwrap_rejects_bodies_without_code() {
        for body in [json!("<html>oops</html>"), json!({"data": []}), Value::Null, json!({"code": 2000})] {
            let err = EnvelopeUnwrap.on_fulfilled(ok(body.clone())).unwrap_err();
            assert_eq!(err.message(), "请求失败", "body {body}");
        }
    }

    #[test]
    fn test_classifier_prefers_table_over_body() {
        let err = StatusClassifier.on_rejected(ApiError::Status {
            status: 404,
            message: "no such banner".to_string(),
        });
        assert_eq!(err.message(), "请求地址出错");

        let err = StatusClassifier.on_rejected(ApiError::Status {
            status: 422,
            message: "name taken".to_string(),
        });
        assert_eq!(err.message(), "name taken");
    }

    #[test]
    fn test_classifier_network_and_passthrough() {
        let err = StatusClassifier.on_rejected(ApiError::Network {
            message: "connection refused".to_string(),
        });
        assert_eq!(err.message(), "网络异常，请检查网络连接");

        let rejected = ApiError::Rejected {
            code: Some(404),
            message: "商品不存在".to_string(),
        };
        assert_eq!(StatusClassifier.on_rejected(rejected.clone()), rejected);
    }

    #[test]
    fn test_session_invalidation_only_on_401() {
        let store = signed_in();
        let guard = SessionInvalidation::new(store.clone());

        guard.on_rejected(ApiError::Status {
            status: 403,
            message: String::new(),
        });
        assert!(store.is_authenticated());

        guard.on_rejected(ApiError::Rejected {
            code: Some(401),
            message: String::new(),
        });
        assert!(!store.is_authenticated());
    }
}
