//! LLM Gateway port
//!
//! Defines the interface for reaching the hosted generative-language service.
//! A gateway turns a [`Credential`] into an authenticated [`LlmClient`]
//! handle; the handle issues generation requests.

use async_trait::async_trait;
use jobscout_domain::{Credential, Model};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub model: Model,
    pub prompt: String,
    /// Enable the service's live web search tool
    pub web_search: bool,
}

/// Gateway to the generative-language service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Construct an authenticated handle for the credential.
    async fn connect(&self, credential: &Credential) -> Result<Box<dyn LlmClient>, GatewayError>;
}

/// An authenticated handle derived from a credential
///
/// Handles are opaque: they are never serialized and never used as cache keys.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Issue exactly one generation call and return the raw response text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError>;
}
