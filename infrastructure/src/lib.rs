//! Infrastructure layer for jobscout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, EnvCredentialSource, FileConfig, FileCredentialConfig,
    FileGeminiConfig, FileSessionConfig,
};
pub use gemini::{client::GeminiClient, gateway::GeminiGateway};
