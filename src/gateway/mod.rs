//! HTTP gateway to the Pressroom backend.
//!
//! [`GatewayClient`] is the only component that performs I/O against the
//! backend. Everything above it works with [`ApiResponse`] values.

mod client;
mod request;
mod response;

pub use client::GatewayClient;
pub use request::{HttpMethod, RequestOptions};
pub use response::{ApiFailure, ApiResponse, ERROR_BODY_PREVIEW_CHARS, classify, is_error};
