//! # Interceptor Pipeline
//!
//! Ordered pre-send and post-receive stages around the transport.
//!
//! ```text
//!  ApiRequest ──▶ RequestInterceptor₀ ──▶ … ──▶ RequestInterceptorₙ ──▶ transport
//!                       │ Err                        │ Err                  │
//!                       ▼                            ▼                      ▼
//!               ┌───────────── Result<ApiResponse, ApiError> ─────────────────┐
//!               │ ResponseInterceptor₀ ──▶ … ──▶ ResponseInterceptorₘ         │
//!               └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Request stages run in order and the first error short-circuits the call
//! (the transport is never reached). The outcome, success or failure, then
//! flows through every response stage in order: a success goes to
//! `on_fulfilled`, which may transform it or turn it into an error; an error
//! goes to `on_rejected`, which may rewrite it but cannot recover. An error
//! raised by stage *i* is seen by the `on_rejected` of stages *i+1..m* only,
//! so each rejection side effect happens once per call.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

use super::request::ApiRequest;
use crate::core::ApiError;

/// A 2xx answer on its way to the caller. `body` starts as the parsed JSON
/// (or the raw text when the body is not JSON) and ends as the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Pre-send stage
pub trait RequestInterceptor: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Mutate the request, or reject it before it is sent.
    fn on_request(&self, request: ApiRequest) -> Result<ApiRequest, ApiError>;
}

/// Post-receive stage
pub trait ResponseInterceptor: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Transform a successful response, or reject it.
    fn on_fulfilled(&self, response: ApiResponse) -> Result<ApiResponse, ApiError> {
        Ok(response)
    }

    /// Observe or rewrite a failure.
    fn on_rejected(&self, error: ApiError) -> ApiError {
        error
    }
}

/// Ordered interceptor chain. Cheap to clone.
#[derive(Clone, Default)]
pub struct Pipeline {
    request: Vec<Arc<dyn RequestInterceptor>>,
    response: Vec<Arc<dyn ResponseInterceptor>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("request", &self.request.iter().map(|i| i.name()).collect::<Vec<_>>())
            .field("response", &self.response.iter().map(|i| i.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-send stage.
    pub fn with_request(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request.push(Arc::new(interceptor));
        self
    }

    /// Append a post-receive stage.
    pub fn with_response(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response.push(Arc::new(interceptor));
        self
    }

    /// Run the pre-send stages in order.
    pub fn before_send(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        self.request.iter().try_fold(request, |request, interceptor| {
            interceptor.on_request(request).inspect_err(|e| {
                tracing::debug!(interceptor = interceptor.name(), error = %e, "Request rejected before send");
            })
        })
    }

    /// Run the post-receive stages in order over the transport outcome.
    pub fn after_receive(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        self.response
            .iter()
            .fold(outcome, |outcome, interceptor| match outcome {
                Ok(response) => interceptor.on_fulfilled(response),
                Err(error) => Err(interceptor.on_rejected(error)),
            })
    }

    /// Send a failure raised after the chain (e.g. payload decoding) through
    /// every `on_rejected` stage, so it is reported like any other failure.
    pub fn reject(&self, error: ApiError) -> ApiError {
        self.response
            .iter()
            .fold(error, |error, interceptor| interceptor.on_rejected(error))
    }

    pub fn request_stages(&self) -> usize {
        self.request.len()
    }

    pub fn response_stages(&self) -> usize {
        self.response.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use reqwest::header::{HeaderName, HeaderValue};
    use serde_json::json;

    type Log = Arc<Mutex<Vec<String>>>;

    struct Tag {
        name: &'static str,
        log: Log,
        fail: bool,
    }

    impl RequestInterceptor for Tag {
        fn name(&self) -> &'static str {
            self.name
        }

        fn on_request(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
            self.log.lock().push(format!("req:{}", self.name));
            if self.fail {
                return Err(ApiError::Encode {
                    message: "blocked".to_string(),
                    detail: String::new(),
                });
            }
            Ok(request.header(
                HeaderName::from_static("x-stage"),
                HeaderValue::from_static(self.name),
            ))
        }
    }

    impl ResponseInterceptor for Tag {
        fn name(&self) -> &'static str {
            self.name
        }

        fn on_fulfilled(&self, response: ApiResponse) -> Result<ApiResponse, ApiError> {
            self.log.lock().push(format!("ok:{}", self.name));
            if self.fail {
                return Err(ApiError::Rejected {
                    code: Some(500),
                    message: self.name.to_string(),
                });
            }
            Ok(response)
        }

        fn on_rejected(&self, error: ApiError) -> ApiError {
            self.log.lock().push(format!("err:{}", self.name));
            error
        }
    }

    fn tag(name: &'static str, log: &Log, fail: bool) -> Tag {
        Tag {
            name,
            log: log.clone(),
            fail,
        }
    }

    fn response() -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: json!({"code": 200}),
        }
    }

    #[test]
    fn test_request_stages_run_in_order() {
        let log = Log::default();
        let pipeline = Pipeline::new()
            .with_request(tag("a", &log, false))
            .with_request(tag("b", &log, false));

        let request = pipeline.before_send(ApiRequest::get("/x")).unwrap();
        assert_eq!(*log.lock(), vec!["req:a", "req:b"]);
        // later stage wins
        assert_eq!(request.headers["x-stage"], "b");
    }

    #[test]
    fn test_request_rejection_short_circuits() {
        let log = Log::default();
        let pipeline = Pipeline::new()
            .with_request(tag("a", &log, true))
            .with_request(tag("b", &log, false));

        let err = pipeline.before_send(ApiRequest::get("/x")).unwrap_err();
        assert_eq!(err.message(), "blocked");
        assert_eq!(*log.lock(), vec!["req:a"]);
    }

    #[test]
    fn test_rejection_only_reaches_later_stages() {
        let log = Log::default();
        let pipeline = Pipeline::new()
            .with_response(tag("a", &log, false))
            .with_response(tag("b", &log, true))
            .with_response(tag("c", &log, false));

        let err = pipeline.after_receive(Ok(response())).unwrap_err();
        assert_eq!(err.message(), "b");
        assert_eq!(*log.lock(), vec!["ok:a", "ok:b", "err:c"]);
    }

    #[test]
    fn test_transport_failure_visits_every_stage_once() {
        let log = Log::default();
        let pipeline = Pipeline::new()
            .with_response(tag("a", &log, false))
            .with_response(tag("b", &log, false));

        let err = pipeline
            .after_receive(Err(ApiError::Network {
                message: "down".to_string(),
            }))
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(*log.lock(), vec!["err:a", "err:b"]);

        log.lock().clear();
        pipeline.reject(ApiError::Network {
            message: "down".to_string(),
        });
        assert_eq!(*log.lock(), vec!["err:a", "err:b"]);
    }

    #[test]
    fn test_empty_pipeline_passes_through() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.after_receive(Ok(response())).unwrap(), response());
        assert_eq!(pipeline.request_stages(), 0);
        assert_eq!(format!("{pipeline:?}"), "Pipeline { request: [], response: [] }");
    }
}
