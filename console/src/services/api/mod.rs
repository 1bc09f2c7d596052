//! # Back-office API Client Module
//!
//! HTTP client for the admin REST API: authentication, banners, brands and
//! categories, collaborations, news, products and uploads.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient, verbs, dispatch
//! ├── config.rs        - ClientConfig (base URL, timeout, content type)
//! ├── request.rs       - ApiRequest descriptor, FilePart, query encoding
//! ├── transport.rs     - reqwest transport
//! ├── pipeline.rs      - ordered request/response interceptor chain
//! ├── interceptors.rs  - auth, envelope, status, session, notification stages
//! ├── status.rs        - status → message table
//! ├── auth.rs          - login, register
//! ├── banner.rs        - banner CRUD
//! ├── category.rs      - brand / main / sub category CRUD, tree
//! ├── collaboration.rs - collaboration CRUD
//! ├── news.rs          - news CRUD, paged listing
//! ├── products.rs      - product CRUD, search
//! └── upload.rs        - image upload
//! ```

pub mod auth;
pub mod banner;
pub mod category;
pub mod client;
pub mod collaboration;
pub mod config;
pub mod interceptors;
pub mod news;
pub mod pipeline;
pub mod products;
pub mod request;
pub mod status;
pub mod transport;
pub mod upload;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use pipeline::{ApiResponse, Pipeline, RequestInterceptor, ResponseInterceptor};
pub use request::{ApiRequest, FilePart, RequestBody};
pub use transport::{RawResponse, ReqwestTransport, TransportError};
