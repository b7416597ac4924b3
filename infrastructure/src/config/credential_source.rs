//! Process-level credential lookup
//!
//! Resolution order:
//!
//! 1. `.env` in the working directory, then `~/.config/jobscout/.env`
//!    (loaded into the process environment, never overriding set variables)
//! 2. The configured environment variable (`GEMINI_API_KEY` by default)
//! 3. `gemini.api_key` from the config file
//!
//! A missing or blank value is fatal for the process-scoped variant.

use super::error::ConfigError;
use super::file_config::FileGeminiConfig;
use super::loader::ConfigLoader;
use jobscout_domain::Credential;
use tracing::{debug, info};

/// Reads the credential from the process environment or configuration
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
    inline: Option<String>,
}

impl EnvCredentialSource {
    pub fn from_config(config: &FileGeminiConfig) -> Self {
        Self {
            var: config.api_key_var().to_string(),
            inline: config.api_key.clone(),
        }
    }

    /// Name of the environment variable consulted
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Load `.env` files into the process environment.
    pub fn load_dotenv() {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded project .env");
        }

        if let Some(dir) = ConfigLoader::config_dir() {
            let user_env = dir.join(".env");
            if user_env.exists() && dotenvy::from_path(&user_env).is_ok() {
                debug!(path = %user_env.display(), "Loaded user .env");
            }
        }
    }

    /// Resolve the credential from the real process environment
    pub fn resolve(&self) -> Result<Credential, ConfigError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential with an injectable variable lookup
    pub fn resolve_with<F>(&self, lookup: F) -> Result<Credential, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(credential) = lookup(&self.var).and_then(Credential::try_new) {
            info!(var = %self.var, "Credential loaded from environment");
            return Ok(credential);
        }

        if let Some(credential) = self.inline.as_deref().and_then(Credential::try_new) {
            info!("Credential loaded from config file");
            return Ok(credential);
        }

        Err(ConfigError::MissingCredential {
            var: self.var.clone(),
        })
    }
}
