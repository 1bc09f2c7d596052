//! # Request Descriptor
//!
//! Everything the pipeline and the transport need to know about one call.
//! Built with the verb constructors and refined with per-call overrides:
//!
//! ```rust
//! use std::time::Duration;
//! use admin_console::services::api::ApiRequest;
//!
//! let request = ApiRequest::get("/news")
//!     .query_pair("page", "2")
//!     .timeout(Duration::from_secs(5));
//! assert_eq!(request.query, vec![("page".to_string(), "2".to_string())]);
//! ```

use std::path::Path;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::status::FALLBACK_MESSAGE;
use crate::core::{ApiError, AppError};

/// Content type forced onto uploads. The transport appends the boundary.
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Form field uploads are sent under.
pub const UPLOAD_FIELD: &str = "file";

/// A single file for a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes: bytes.into(),
        }
    }

    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk; the part is named after the file.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UPLOAD_FIELD.to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(FilePart),
}

/// One outgoing call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Per-call headers; they win over the client defaults.
    pub headers: HeaderMap,
    /// Per-call timeout; `None` means the client default.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Upload request: multipart body with `file` under field [`UPLOAD_FIELD`],
    /// content type forced to `multipart/form-data`.
    pub fn upload(path: impl Into<String>, file: FilePart) -> Self {
        Self::post(path).multipart(file)
    }

    /// Serialize `body` as the JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body).map_err(encode_error)?);
        Ok(self)
    }

    pub fn multipart(mut self, file: FilePart) -> Self {
        self.body = RequestBody::Multipart(file);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(MULTIPART_CONTENT_TYPE));
        self
    }

    /// Append the fields of `params` as query parameters. Absent (`null`) values are skipped.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self, ApiError> {
        self.query.extend(query_pairs(params)?);
        Ok(self)
    }

    pub fn query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Flatten a serializable value into query pairs.
///
/// Objects become one pair per non-null field. Nested objects use bracket
/// keys (`filter[brandId]=3`); arrays of scalars repeat the key with a `[]`
/// suffix, arrays of objects are indexed (`items[0][id]=1`). `null` yields no
/// pairs.
pub fn query_pairs<Q: Serialize + ?Sized>(params: &Q) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params).map_err(encode_error)?;
    let fields = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(fields) => fields,
        other => {
            return Err(ApiError::Encode {
                message: FALLBACK_MESSAGE.to_string(),
                detail: format!("query parameters must be an object, got {other}"),
            })
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        flatten_into(&mut pairs, key, value);
    }
    Ok(pairs)
}

fn flatten_into(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Object(fields) => {
            for (field, value) in fields {
                flatten_into(pairs, format!("{key}[{field}]"), value);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::Object(_) | Value::Array(_) => flatten_into(pairs, format!("{key}[{index}]"), item),
                    item => flatten_into(pairs, format!("{key}[]"), item),
                }
            }
        }
        Value::String(s) => pairs.push((key, s)),
        other => pairs.push((key, other.to_string())),
    }
}

pub(crate) fn encode_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Encode {
        message: FALLBACK_MESSAGE.to_string(),
        detail: e.to_string(),
    }
}
