//! Application layer for jobscout
//!
//! This crate contains the port definitions, the credential lifecycle,
//! the result cache and the session orchestration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CredentialPolicy, SessionConfig};
pub use ports::llm_gateway::{GatewayError, GenerateRequest, LlmClient, LlmGateway};
pub use services::{
    credential_store::{CredentialOutcome, CredentialStore},
    result_cache::{CacheLookup, ResultCache},
    search_client::{FALLBACK_MESSAGE, FetchOutcome, SearchClient},
};
pub use use_cases::session::{RESULT_CAPTION, SessionController, SessionView};
