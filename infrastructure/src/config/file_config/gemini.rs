//! Gemini configuration from TOML (`[gemini]` section)

use jobscout_domain::Model;
use serde::{Deserialize, Serialize};

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier (default: "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the generative-language API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Check the key against the API when it is submitted.
    pub validate_on_connect: bool,
    /// Attach the Google Search tool to every request.
    pub web_search: bool,
}

impl FileGeminiConfig {
    pub const DEFAULT_API_KEY_ENV: &'static str = "GEMINI_API_KEY";

    /// Parse the model, falling back to the default when blank
    pub fn parse_model(&self) -> Model {
        if self.model.trim().is_empty() {
            return Model::default();
        }
        let Ok(model) = self.model.parse::<Model>();
        model
    }

    /// Environment variable holding the key, falling back to the default when blank
    pub fn api_key_var(&self) -> &str {
        if self.api_key_env.trim().is_empty() {
            Self::DEFAULT_API_KEY_ENV
        } else {
            self.api_key_env.trim()
        }
    }
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: crate::gemini::DEFAULT_BASE_URL.to_string(),
            api_key_env: Self::DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            validate_on_connect: true,
            web_search: true,
        }
    }
}
