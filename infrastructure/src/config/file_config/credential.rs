//! Credential configuration from TOML (`[credential]` section)

use jobscout_application::CredentialPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialConfig {
    /// `prompt` (default), `memoized` or `environment`
    pub source: CredentialPolicy,
}
