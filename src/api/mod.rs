//! Upstream LocaBriques API layer.
//!
//! - `client` - the shared HTTP client and the outgoing request descriptor
//! - `error` - normalized API error type
//! - `multipart` - multipart/image assembly for the shop profile endpoints

pub mod client;
pub mod error;
pub mod multipart;

pub use client::{ApiClient, ApiRequest, Query};
pub use error::{ApiError, ApiResult};
pub use multipart::shop_profile_form;
