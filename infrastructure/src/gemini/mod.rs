//! Gemini REST adapter
//!
//! Implements [`LlmGateway`](jobscout_application::LlmGateway) and
//! [`LlmClient`](jobscout_application::LlmClient) over the public
//! generative-language REST API:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | connect (key check) | `GET {base}/v1beta/models?pageSize=1` |
//! | generate | `POST {base}/v1beta/models/{model}:generateContent` |
//!
//! The key travels in the `x-goog-api-key` header, never in the URL.

pub mod client;
pub mod error;
pub mod gateway;
pub mod types;

/// Header carrying the API key
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
