//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Hide the latest result and disable the form when the credential is lost
    pub regate_on_credential_loss: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            regate_on_credential_loss: true,
        }
    }
}
