//! Session configuration: credential sourcing and search parameters.
//!
//! These are application-layer concerns, resolved by the CLI from the
//! config file and flags before any session starts.

use jobscout_domain::{Model, RegatePolicy};
use serde::{Deserialize, Serialize};

/// Where a session's credential comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialPolicy {
    /// User types the key and presses the confirm button
    #[default]
    #[serde(rename = "prompt", alias = "confirm", alias = "explicit_confirm")]
    ExplicitConfirm,
    /// Every distinct committed value gets a memoized handle
    Memoized,
    /// Read once from process configuration at startup, no per-session override
    #[serde(rename = "environment", alias = "env", alias = "process_scoped")]
    ProcessScoped,
}

impl CredentialPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialPolicy::ExplicitConfirm => "prompt",
            CredentialPolicy::Memoized => "memoized",
            CredentialPolicy::ProcessScoped => "environment",
        }
    }

    /// Whether the user can type a credential in the form
    pub fn accepts_user_input(&self) -> bool {
        !matches!(self, CredentialPolicy::ProcessScoped)
    }
}

impl std::fmt::Display for CredentialPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CredentialPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prompt" | "confirm" | "explicit_confirm" | "explicit-confirm" => {
                Ok(CredentialPolicy::ExplicitConfirm)
            }
            "memoized" | "memo" => Ok(CredentialPolicy::Memoized),
            "environment" | "env" | "process" | "process_scoped" | "process-scoped" => {
                Ok(CredentialPolicy::ProcessScoped)
            }
            other => Err(format!(
                "unknown credential source '{}', expected prompt, memoized or environment",
                other
            )),
        }
    }
}

/// Resolved parameters for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub credential_policy: CredentialPolicy,
    pub regate: RegatePolicy,
    pub model: Model,
    /// Attach the web search tool to every request
    pub web_search: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credential_policy: CredentialPolicy::default(),
            regate: RegatePolicy::default(),
            model: Model::default(),
            web_search: true,
        }
    }
}

impl SessionConfig {
    pub fn with_credential_policy(mut self, policy: CredentialPolicy) -> Self {
        self.credential_policy = policy;
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}
