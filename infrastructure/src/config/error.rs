//! Configuration error types

use thiserror::Error;

/// Errors raised while loading configuration or the process credential
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Config file not found: {}", path.display())]
    NotFound { path: std::path::PathBuf },

    #[error(
        "No API key found: set the {var} environment variable (or add it to a .env file)"
    )]
    MissingCredential { var: String },
}
