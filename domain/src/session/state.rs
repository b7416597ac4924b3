//! Session state machine
//!
//! ```text
//!                 readiness = true
//!  NoCredential ───────────────────▶ Ready
//!       ▲                              │ search finished
//!       │ readiness = false            ▼
//!       └──────────────────────── ResultShown ◀─┐
//!                                      └────────┘ search finished (overwrite)
//! ```
//!
//! Transitions are plain functions that consume the state and return the
//! next one, so the form logic is testable without any UI.

use crate::job::result::SearchResult;
use serde::{Deserialize, Serialize};

/// What happens to a visible result when the credential stops being valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegatePolicy {
    /// Drop back to `NoCredential` and hide the latest result
    #[default]
    Strict,
    /// Disable the controls but keep the latest result on screen
    KeepResults,
}

impl RegatePolicy {
    pub fn from_regate_flag(regate_on_credential_loss: bool) -> Self {
        if regate_on_credential_loss {
            RegatePolicy::Strict
        } else {
            RegatePolicy::KeepResults
        }
    }
}

/// State of one interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No usable credential. `retained` holds the last result only under
    /// [`RegatePolicy::KeepResults`].
    NoCredential { retained: Option<SearchResult> },
    Ready,
    ResultShown(SearchResult),
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::NoCredential { retained: None }
    }
}

impl SessionState {
    /// Apply a readiness change reported by the credential store
    pub fn on_readiness(self, ready: bool, policy: RegatePolicy) -> Self {
        match (self, ready) {
            (SessionState::NoCredential { retained }, true) => match retained {
                Some(result) => SessionState::ResultShown(result),
                None => SessionState::Ready,
            },
            (state @ SessionState::NoCredential { .. }, false) => state,
            (state, true) => state,
            (SessionState::Ready, false) => SessionState::default(),
            (SessionState::ResultShown(result), false) => match policy {
                RegatePolicy::Strict => SessionState::default(),
                RegatePolicy::KeepResults => SessionState::NoCredential {
                    retained: Some(result),
                },
            },
        }
    }

    /// Store a finished search as the latest result.
    ///
    /// Ignored while there is no credential: a search cannot have been
    /// triggered from that state.
    pub fn on_result(self, result: SearchResult) -> Self {
        match self {
            SessionState::NoCredential { .. } => self,
            SessionState::Ready | SessionState::ResultShown(_) => {
                SessionState::ResultShown(result)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self, SessionState::NoCredential { .. })
    }

    /// The result currently visible, if any
    pub fn latest_result(&self) -> Option<&SearchResult> {
        match self {
            SessionState::NoCredential { retained } => retained.as_ref(),
            SessionState::Ready => None,
            SessionState::ResultShown(result) => Some(result),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::NoCredential { .. } => "NoCredential",
            SessionState::Ready => "Ready",
            SessionState::ResultShown(_) => "ResultShown",
        }
    }
}
