//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin console and the back-office API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{code, data, message}` wrapper around every response
//!   - **[`dto::auth`]**: Login and user profile DTOs
//!   - **[`dto::banner`]**: Home page banners
//!   - **[`dto::catalog`]**: Brands, main categories, sub categories, category tree
//!   - **[`dto::collaboration`]**: Partner collaborations
//!   - **[`dto::news`]**: News and events with pagination
//!   - **[`dto::product`]**: Products
//!
//! ## Wire Format
//!
//! The API speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted from JSON when `None`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::envelope::Envelope;
//! use shared::dto::banner::Banner;
//!
//! let body = r#"{"code":200,"data":[],"message":"ok"}"#;
//! let envelope: Envelope<Vec<Banner>> = serde_json::from_str(body).unwrap();
//! assert!(envelope.is_success());
//! assert!(envelope.data.is_empty());
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
