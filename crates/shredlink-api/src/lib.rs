//! Wire types and HTTP client for the ShredLink service.
//!
//! The service stores encrypted one-time/expiring text snippets and exposes
//! two JSON endpoints: one to create a share link and one to unlock a
//! password-protected link. This crate carries the request/response structs
//! and a thin async client; it compiles both natively and for wasm32.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{CreateRequest, CreateResponse, ErrorResponse, UnlockRequest, UnlockResponse};
