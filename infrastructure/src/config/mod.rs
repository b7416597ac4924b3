//! Configuration file loading for jobscout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JOBSCOUT_*` environment variables (`JOBSCOUT_GEMINI__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./jobscout.toml` or `./.jobscout.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/jobscout/config.toml`
//! 5. Default values
//!
//! The process-level credential is resolved separately by
//! [`EnvCredentialSource`].

mod credential_source;
mod error;
mod file_config;
mod loader;

pub use credential_source::EnvCredentialSource;
pub use error::ConfigError;
pub use file_config::{FileConfig, FileCredentialConfig, FileGeminiConfig, FileSessionConfig};
pub use loader::ConfigLoader;
