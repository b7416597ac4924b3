//! Credential store
//!
//! Holds at most one active credential handle per session, together with
//! the readiness flag derived from it. A handle exists if and only if the
//! last construction attempt succeeded.
//!
//! | Policy            | `submit` behavior                                      |
//! |-------------------|--------------------------------------------------------|
//! | `ExplicitConfirm` | connects on every confirm action                       |
//! | `Memoized`        | connects once per distinct value, later submits reuse  |
//! | `ProcessScoped`   | connected once at startup, `submit` is ignored         |

use crate::config::CredentialPolicy;
use crate::ports::llm_gateway::{GatewayError, LlmClient, LlmGateway};
use jobscout_domain::{Credential, Notice};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a `submit` call did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOutcome {
    /// Input was empty: handle cleared, not ready
    Cleared,
    /// A new handle was constructed
    Accepted,
    /// A memoized handle was reused without reconstruction
    Reused,
    /// Construction failed: handle cleared, not ready
    Rejected(String),
    /// The store does not accept per-session input
    Ignored,
}

impl CredentialOutcome {
    /// User-visible notice for this outcome
    pub fn notice(&self) -> Notice {
        match self {
            CredentialOutcome::Cleared => Notice::warning("Please enter your Gemini API key."),
            CredentialOutcome::Accepted | CredentialOutcome::Reused => {
                Notice::success("API key registered successfully.")
            }
            CredentialOutcome::Rejected(cause) => Notice::error(format!(
                "API key initialization failed, please check the key. ({})",
                cause
            )),
            CredentialOutcome::Ignored => {
                Notice::info("The API key is provided by the process configuration.")
            }
        }
    }
}

/// Per-session owner of the credential handle
pub struct CredentialStore {
    gateway: Arc<dyn LlmGateway>,
    policy: CredentialPolicy,
    active: Option<Credential>,
    handle: Option<Arc<dyn LlmClient>>,
    memo: HashMap<Credential, Arc<dyn LlmClient>>,
}

impl CredentialStore {
    /// Create an empty store for an interactive policy
    pub fn new(gateway: Arc<dyn LlmGateway>, policy: CredentialPolicy) -> Self {
        Self {
            gateway,
            policy,
            active: None,
            handle: None,
            memo: HashMap::new(),
        }
    }

    /// Connect once with a process-level credential.
    ///
    /// Failure is returned to the caller, which treats it as fatal.
    pub async fn process_scoped(
        gateway: Arc<dyn LlmGateway>,
        credential: Credential,
    ) -> Result<Self, GatewayError> {
        let handle = gateway.connect(&credential).await?;
        info!(credential = %credential, "Process credential connected");
        Ok(Self {
            gateway,
            policy: CredentialPolicy::ProcessScoped,
            active: Some(credential),
            handle: Some(Arc::from(handle)),
            memo: HashMap::new(),
        })
    }

    /// Apply raw credential input.
    ///
    /// Never fails: construction errors become [`CredentialOutcome::Rejected`]
    /// with the store reset to not-ready.
    pub async fn submit(&mut self, raw: &str) -> CredentialOutcome {
        if self.policy == CredentialPolicy::ProcessScoped {
            debug!("Ignoring credential input for process-scoped store");
            return CredentialOutcome::Ignored;
        }

        let Some(credential) = Credential::try_new(raw) else {
            self.clear();
            debug!("Credential cleared");
            return CredentialOutcome::Cleared;
        };

        if self.policy == CredentialPolicy::Memoized
            && let Some(handle) = self.memo.get(&credential)
        {
            self.handle = Some(Arc::clone(handle));
            debug!(credential = %credential, "Reusing memoized handle");
            self.active = Some(credential);
            return CredentialOutcome::Reused;
        }

        match self.gateway.connect(&credential).await {
            Ok(handle) => {
                let handle: Arc<dyn LlmClient> = Arc::from(handle);
                if self.policy == CredentialPolicy::Memoized {
                    self.memo.insert(credential.clone(), Arc::clone(&handle));
                }
                info!(credential = %credential, "Credential accepted");
                self.handle = Some(handle);
                self.active = Some(credential);
                CredentialOutcome::Accepted
            }
            Err(e) => {
                self.clear();
                warn!(credential = %credential, "Credential rejected: {}", e);
                CredentialOutcome::Rejected(e.to_string())
            }
        }
    }

    fn clear(&mut self) {
        self.active = None;
        self.handle = None;
    }

    /// Readiness flag: a handle is present
    pub fn is_ready(&self) -> bool {
        self.handle.is_some()
    }

    /// The active handle, if the last construction succeeded
    pub fn handle(&self) -> Option<&dyn LlmClient> {
        self.handle.as_deref()
    }

    /// The credential behind the active handle
    pub fn active_credential(&self) -> Option<&Credential> {
        self.active.as_ref()
    }

    pub fn policy(&self) -> CredentialPolicy {
        self.policy
    }

    /// Number of memoized handles (always 0 outside `Memoized`)
    pub fn memoized_count(&self) -> usize {
        self.memo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GenerateRequest;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct EchoClient;

    #[async_trait]
    impl LlmClient for EchoClient {
        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            Ok(request.prompt.clone())
        }
    }

    /// Accepts any key except "badkey", counting construction attempts.
    struct CountingGateway {
        connects: AtomicUsize,
    }

    impl CountingGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                connects: AtomicUsize::new(0),
            })
        }

        fn connects(&self) -> usize {
            self.connects.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for CountingGateway {
        async fn connect(
            &self,
            credential: &Credential,
        ) -> Result<Box<dyn LlmClient>, GatewayError> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            if credential.expose() == "badkey" {
                Err(GatewayError::Unauthorized("API key not valid".to_string()))
            } else {
                Ok(Box::new(EchoClient))
            }
        }
    }

    #[tokio::test]
    async fn test_empty_submit_clears_from_any_state() {
        let gateway = CountingGateway::new();
        let mut store = CredentialStore::new(gateway.clone(), CredentialPolicy::ExplicitConfirm);

        assert_eq!(store.submit("").await, CredentialOutcome::Cleared);
        assert!(!store.is_ready());
        assert!(store.handle().is_none());

        assert_eq!(store.submit("validkey").await, CredentialOutcome::Accepted);
        assert!(store.is_ready());

        assert_eq!(store.submit("   ").await, CredentialOutcome::Cleared);
        assert!(!store.is_ready());
        assert!(store.handle().is_none());
        assert!(store.active_credential().is_none());
        assert_eq!(gateway.connects(), 1);
    }

    #[tokio::test]
    async fn test_rejected_credential_resets_readiness() {
        let gateway = CountingGateway::new();
        let mut store = CredentialStore::new(gateway, CredentialPolicy::ExplicitConfirm);

        store.submit("validkey").await;
        assert!(store.is_ready());

        let outcome = store.submit("badkey").await;
        assert!(matches!(outcome, CredentialOutcome::Rejected(ref cause) if cause.contains("API key not valid")));
        assert!(!store.is_ready());
        assert!(outcome.notice().is_error());
        assert!(outcome.notice().message.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_explicit_confirm_reconnects_each_time() {
        let gateway = CountingGateway::new();
        let mut store = CredentialStore::new(gateway.clone(), CredentialPolicy::ExplicitConfirm);

        store.submit("validkey").await;
        store.submit("validkey").await;
        assert_eq!(gateway.connects(), 2);
        assert_eq!(store.memoized_count(), 0);
    }

    #[tokio::test]
    async fn test_memoized_submit_does_not_reconstruct() {
        let gateway = CountingGateway::new();
        let mut store = CredentialStore::new(gateway.clone(), CredentialPolicy::Memoized);

        assert_eq!(store.submit("validkey").await, CredentialOutcome::Accepted);
        assert_eq!(store.submit("validkey").await, CredentialOutcome::Reused);
        assert_eq!(gateway.connects(), 1);

        // Switching back to a previously entered value is free
        assert_eq!(store.submit("otherkey").await, CredentialOutcome::Accepted);
        assert_eq!(store.submit(" validkey ").await, CredentialOutcome::Reused);
        assert_eq!(gateway.connects(), 2);
        assert_eq!(store.memoized_count(), 2);
        assert_eq!(store.active_credential().unwrap().expose(), "validkey");
    }

    #[tokio::test]
    async fn test_memoized_failures_are_not_memoized() {
        let gateway = CountingGateway::new();
        let mut store = CredentialStore::new(gateway.clone(), CredentialPolicy::Memoized);

        store.submit("badkey").await;
        store.submit("badkey").await;
        assert_eq!(gateway.connects(), 2);
        assert_eq!(store.memoized_count(), 0);
        assert!(!store.is_ready());
    }

    #[tokio::test]
    async fn test_process_scoped_ignores_input() {
        let gateway = CountingGateway::new();
        let credential = Credential::try_new("validkey").unwrap();
        let mut store = CredentialStore::process_scoped(gateway.clone(), credential)
            .await
            .unwrap();

        assert!(store.is_ready());
        assert_eq!(store.submit("").await, CredentialOutcome::Ignored);
        assert!(store.is_ready());
        assert_eq!(gateway.connects(), 1);
    }

    #[tokio::test]
    async fn test_process_scoped_failure_is_returned() {
        let gateway = CountingGateway::new();
        let credential = Credential::try_new("badkey").unwrap();
        let result = CredentialStore::process_scoped(gateway, credential).await;
        assert!(matches!(result, Err(GatewayError::Unauthorized(_))));
    }

    #[test]
    fn test_outcome_notices() {
        assert_eq!(
            CredentialOutcome::Cleared.notice().level,
            jobscout_domain::NoticeLevel::Warning
        );
        assert_eq!(
            CredentialOutcome::Reused.notice().level,
            jobscout_domain::NoticeLevel::Success
        );
    }
}
