//! # HTTP Transport
//!
//! The reqwest-backed [`HttpTransport`]. It sends exactly what the pipeline
//! prepared and reports any HTTP status as an answer; deciding what a status
//! means is left to the pipeline.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::request::{ApiRequest, FilePart, RequestBody, UPLOAD_FIELD};
use crate::core::HttpTransport;

/// What the server answered
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// The request produced no response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The per-request timeout expired.
    #[error("request timed out")]
    TimedOut,

    /// Connection refused, DNS failure, reset, TLS failure.
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// The request could not be assembled (bad mime type, unserializable body).
    #[error("invalid request: {0}")]
    Build(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::TimedOut
        } else if e.is_builder() {
            TransportError::Build(e.to_string())
        } else {
            TransportError::Unreachable(e.to_string())
        }
    }
}

/// [`HttpTransport`] over a pooled `reqwest::Client`.
///
/// The client is internally reference-counted and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, url: String, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let ApiRequest {
            method,
            query,
            body,
            mut headers,
            timeout,
            ..
        } = request;

        let mut builder = self.client.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        builder = match body {
            RequestBody::Empty => builder.headers(headers),
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(&value).map_err(|e| TransportError::Build(e.to_string()))?;
                builder.headers(headers).body(bytes)
            }
            RequestBody::Multipart(file) => {
                // The encoder sets multipart/form-data with its boundary.
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(multipart_form(file)?)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        // The status has arrived, so the answer stands even if the body is cut short.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!(status = status.as_u16(), error = %e, "Response body unreadable, keeping status");
                Vec::new()
            }
        };

        Ok(RawResponse { status, headers, body })
    }
}

fn multipart_form(file: FilePart) -> Result<Form, TransportError> {
    let FilePart {
        file_name,
        mime,
        bytes,
    } = file;

    let mut part = Part::bytes(bytes).file_name(file_name);
    if let Some(mime) = mime {
        part = part.mime_str(&mime)?;
    }
    Ok(Form::new().part(UPLOAD_FIELD, part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[test]
    fn test_invalid_mime_is_a_build_error() {
        let file = FilePart::new("a.png", vec![0u8; 4]).mime("not a mime");
        assert!(matches!(multipart_form(file), Err(TransportError::Build(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = ReqwestTransport::new().unwrap();
        let err = transport
            .send(format!("http://127.0.0.1:{port}/banners"), ApiRequest::get("/banners"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Unreachable(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_truncated_body_keeps_status() {
        let url = truncated_server("HTTP/1.1 401 Unauthorized\r\nContent-Length: 100\r\n\r\n{\"mess").await;

        let transport = ReqwestTransport::new().unwrap();
        let raw = transport.send(url, ApiRequest::get("/banners")).await.unwrap();
        assert_eq!(raw.status, StatusCode::UNAUTHORIZED);
        assert!(raw.body.is_empty());
    }

    #[tokio::test]
    async fn test_body_timeout_keeps_status() {
        // Headers arrive, then the body never does.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_head(&mut socket).await;
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 10\r\n\r\n")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let transport = ReqwestTransport::new().unwrap();
        let request = ApiRequest::get("/banners").timeout(Duration::from_millis(300));
        let raw = transport.send(format!("http://{addr}/banners"), request).await.unwrap();
        assert_eq!(raw.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(raw.body.is_empty());
    }

    async fn read_head(socket: &mut TcpStream) {
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }
    }

    /// One-shot server that sends `response` and hangs up.
    async fn truncated_server(response: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_head(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}/banners")
    }
}
