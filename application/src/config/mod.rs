//! Application-level configuration.
//!
//! - [`SessionConfig`]: how a session sources its credential, which model it
//!   queries and how it reacts to losing the credential

pub mod session_config;

pub use session_config::{CredentialPolicy, SessionConfig};
