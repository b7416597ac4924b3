//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where appropriate.

mod credential;
mod gemini;
mod session;

pub use credential::FileCredentialConfig;
pub use gemini::FileGeminiConfig;
pub use session::FileSessionConfig;

use jobscout_application::SessionConfig;
use jobscout_domain::{Model, RegatePolicy};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Credential sourcing
    pub credential: FileCredentialConfig,
    /// Session behavior
    pub session: FileSessionConfig,
}

impl FileConfig {
    /// Resolve the application-level session configuration
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            credential_policy: self.credential.source,
            regate: RegatePolicy::from_regate_flag(self.session.regate_on_credential_loss),
            model: self.gemini.parse_model(),
            web_search: self.gemini.web_search,
        }
    }

    /// Validate the configuration, returning human-readable warnings.
    ///
    /// Warnings never stop the program; the CLI logs them.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.gemini.model.trim().is_empty() {
            warnings.push(format!(
                "gemini.model is empty, falling back to '{}'",
                Model::default()
            ));
        }

        if self.gemini.api_key_env.trim().is_empty() {
            warnings.push(format!(
                "gemini.api_key_env is empty, falling back to '{}'",
                FileGeminiConfig::DEFAULT_API_KEY_ENV
            ));
        }

        if self.gemini.api_key.is_some() {
            warnings.push(
                "gemini.api_key is set in a config file; prefer the environment variable"
                    .to_string(),
            );
        }

        let model = self.gemini.parse_model();
        if self.gemini.web_search && !model.supports_search_tool() {
            warnings.push(format!(
                "gemini.model '{}' is not a known search-capable model",
                model
            ));
        }

        warnings
    }
}
