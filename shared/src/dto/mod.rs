//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the back-office REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response wrapper and success-code test
//! - [`auth`] - Login request/result and user profile
//! - [`banner`] - Banner CRUD
//! - [`catalog`] - Brand / main category / sub category CRUD and the category tree
//! - [`collaboration`] - Collaboration CRUD
//! - [`news`] - News CRUD and paginated listing
//! - [`product`] - Product CRUD
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/admin/login
//! Content-Type: application/json;charset=utf-8
//!
//! { "username": "admin", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "code": 200,
//!   "data": {
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "userInfo": { "id": 1, "username": "admin", "permissions": ["banner:edit"] }
//!   },
//!   "message": "登录成功"
//! }
//! ```

pub mod auth;
pub mod banner;
pub mod catalog;
pub mod collaboration;
pub mod envelope;
pub mod news;
pub mod product;

pub use auth::*;
pub use banner::*;
pub use catalog::*;
pub use collaboration::*;
pub use envelope::*;
pub use news::*;
pub use product::*;
