//! Stateful services used by the session use case
//!
//! - [`credential_store::CredentialStore`]: credential → handle lifecycle
//! - [`result_cache::ResultCache`]: process-wide memo of search outcomes by query
//! - [`search_client::SearchClient`]: one outbound call with fallback

pub mod credential_store;
pub mod result_cache;
pub mod search_client;
