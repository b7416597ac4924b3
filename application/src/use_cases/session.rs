//! Session use case.
//!
//! Orchestrates one session of the single-page form:
//!
//! 1. Credential input goes to the [`CredentialStore`]; its readiness gates
//!    the category selector and the search trigger.
//! 2. The trigger builds a [`JobRequest`], looks it up in the shared
//!    [`ResultCache`] and, on a miss, calls the [`SearchClient`].
//! 3. The result (or fallback) becomes the latest result and the next
//!    [`SessionView`] renders it.
//!
//! All per-session state lives in the controller. Only the cache is shared
//! across sessions.

use crate::config::CredentialPolicy;
use crate::services::credential_store::{CredentialOutcome, CredentialStore};
use crate::services::result_cache::ResultCache;
use crate::services::search_client::SearchClient;
use jobscout_domain::{
    JobCategory, JobRequest, Notice, RegatePolicy, SearchResult, SessionState,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Caption shown under every result
pub const RESULT_CAPTION: &str = "Listings come from Gemini's live web search. \
Always verify final hiring terms in the original posting.";

const ENTER_CREDENTIAL_PROMPT: &str =
    "Enter your Gemini API key in the sidebar and confirm it to start searching.";
const PICK_CATEGORY_HINT: &str =
    "Pick a job category in the sidebar and start the search.";
const PROCESS_CREDENTIAL_HINT: &str = "Pick a job category and start the search.";

/// Snapshot of everything the UI needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub state: &'static str,
    pub credential_editable: bool,
    pub selector_enabled: bool,
    pub trigger_enabled: bool,
    pub selected: JobCategory,
    /// Placeholder text when no result is visible
    pub placeholder: Option<&'static str>,
    pub result: Option<SearchResult>,
    pub caption: Option<&'static str>,
}

/// Controller for one interactive session
pub struct SessionController {
    store: CredentialStore,
    cache: Arc<ResultCache>,
    search: SearchClient,
    regate: RegatePolicy,
    state: SessionState,
    selected: JobCategory,
    notices: Vec<Notice>,
}

impl SessionController {
    pub fn new(
        store: CredentialStore,
        cache: Arc<ResultCache>,
        search: SearchClient,
        regate: RegatePolicy,
    ) -> Self {
        let state = SessionState::default().on_readiness(store.is_ready(), regate);
        Self {
            store,
            cache,
            search,
            regate,
            state,
            selected: JobCategory::default(),
            notices: Vec::new(),
        }
    }

    /// Apply credential input (confirm action, or field commit when memoized)
    pub async fn submit_credential(&mut self, raw: &str) -> CredentialOutcome {
        let outcome = self.store.submit(raw).await;
        self.notices.push(outcome.notice());

        let previous = self.state.name();
        self.state = std::mem::take(&mut self.state).on_readiness(self.store.is_ready(), self.regate);
        debug!(
            from = previous,
            to = self.state.name(),
            "Session state after credential submit"
        );
        outcome
    }

    /// Change the selected category. Returns `false` while the selector is disabled.
    pub fn select_category(&mut self, category: JobCategory) -> bool {
        if !self.state.is_ready() {
            return false;
        }
        self.selected = category;
        true
    }

    /// Run the search for the selected category.
    ///
    /// Returns the new latest result, or `None` when the trigger is disabled.
    pub async fn run_search(&mut self) -> Option<SearchResult> {
        let Some(handle) = self.store.handle().filter(|_| self.state.is_ready()) else {
            self.notices.push(CredentialOutcome::Cleared.notice());
            return None;
        };

        let request = JobRequest::build(self.selected);
        info!(category = self.selected.as_str(), "Search triggered");

        let search = &self.search;
        let lookup = self
            .cache
            .get_or_fetch(&request.query, || search.fetch(handle, &request))
            .await;

        // A cached fallback is re-rendered without raising the error again
        let outcome = lookup.outcome;
        let result = match outcome.notice() {
            Some(notice) => {
                if lookup.fresh {
                    self.notices.push(notice);
                }
                SearchResult::fallback(request.category, outcome.text())
            }
            None => SearchResult::new(request.category, outcome.text()),
        };

        self.state = std::mem::take(&mut self.state).on_result(result.clone());
        Some(result)
    }

    /// Drain notices produced since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn view(&self) -> SessionView {
        let ready = self.state.is_ready();
        let result = self.state.latest_result().cloned();
        let placeholder = match (&result, ready) {
            (Some(_), _) => None,
            (None, false) => Some(ENTER_CREDENTIAL_PROMPT),
            (None, true) if self.store.policy() == CredentialPolicy::ProcessScoped => {
                Some(PROCESS_CREDENTIAL_HINT)
            }
            (None, true) => Some(PICK_CATEGORY_HINT),
        };

        SessionView {
            state: self.state.name(),
            credential_editable: self.store.policy().accepts_user_input(),
            selector_enabled: ready,
            trigger_enabled: ready,
            selected: self.selected,
            placeholder,
            caption: result.as_ref().map(|_| RESULT_CAPTION),
            result,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selected(&self) -> JobCategory {
        self.selected
    }

    pub fn credential_policy(&self) -> CredentialPolicy {
        self.store.policy()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GatewayError, GenerateRequest, LlmClient, LlmGateway};
    use crate::services::search_client::FALLBACK_MESSAGE;
    use async_trait::async_trait;
    use jobscout_domain::{Credential, Model, NoticeLevel};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct Calls {
        generates: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    struct MockClient {
        calls: Arc<Calls>,
        fail: bool,
    }

    #[async_trait]
    impl LlmClient for MockClient {
        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            self.calls.generates.fetch_add(1, Ordering::SeqCst);
            self.calls.prompts.lock().unwrap().push(request.prompt.clone());
            if self.fail {
                Err(GatewayError::Timeout("operation timed out".to_string()))
            } else {
                Ok(format!("| listings for | {} |", request.prompt.len()))
            }
        }
    }

    /// Accepts "validkey" and "slowkey"; the latter yields a failing client.
    struct MockGateway {
        calls: Arc<Calls>,
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn connect(
            &self,
            credential: &Credential,
        ) -> Result<Box<dyn LlmClient>, GatewayError> {
            match credential.expose() {
                "validkey" => Ok(Box::new(MockClient {
                    calls: self.calls.clone(),
                    fail: false,
                })),
                "slowkey" => Ok(Box::new(MockClient {
                    calls: self.calls.clone(),
                    fail: true,
                })),
                _ => Err(GatewayError::Unauthorized("API key not valid".to_string())),
            }
        }
    }

    fn controller(regate: RegatePolicy) -> (SessionController, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let gateway = Arc::new(MockGateway {
            calls: calls.clone(),
        });
        let store = CredentialStore::new(gateway, CredentialPolicy::ExplicitConfirm);
        let controller = SessionController::new(
            store,
            Arc::new(ResultCache::new()),
            SearchClient::new(Model::Gemini25Flash),
            regate,
        );
        (controller, calls)
    }

    #[tokio::test]
    async fn test_no_credential_disables_controls() {
        let (mut controller, calls) = controller(RegatePolicy::Strict);
        controller.submit_credential("").await;

        let view = controller.view();
        assert!(!view.selector_enabled);
        assert!(!view.trigger_enabled);
        assert_eq!(view.placeholder, Some(ENTER_CREDENTIAL_PROMPT));
        assert!(view.result.is_none());

        assert!(!controller.select_category(JobCategory::Teacher));
        assert!(controller.run_search().await.is_none());
        assert_eq!(calls.generates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_renders_labelled_result() {
        let (mut controller, calls) = controller(RegatePolicy::Strict);
        assert_eq!(
            controller.submit_credential("validkey").await,
            CredentialOutcome::Accepted
        );
        assert!(controller.view().selector_enabled);
        assert_eq!(controller.state().name(), "Ready");

        assert!(controller.select_category(JobCategory::Teacher));
        let result = controller.run_search().await.unwrap();

        assert_eq!(result.label, "Teacher (교사)");
        assert!(!result.is_fallback);
        assert_eq!(calls.generates.load(Ordering::SeqCst), 1);
        assert!(calls.prompts.lock().unwrap()[0]
            .contains(JobCategory::Teacher.search_query()));

        let view = controller.view();
        assert_eq!(view.state, "ResultShown");
        assert_eq!(view.result.as_ref().unwrap().text, result.text);
        assert_eq!(view.caption, Some(RESULT_CAPTION));
        assert!(view.placeholder.is_none());
    }

    #[tokio::test]
    async fn test_repeat_search_hits_cache() {
        let (mut controller, calls) = controller(RegatePolicy::Strict);
        controller.submit_credential("validkey").await;
        controller.select_category(JobCategory::Teacher);

        let first = controller.run_search().await.unwrap();
        let second = controller.run_search().await.unwrap();

        assert_eq!(first.text, second.text);
        assert_eq!(calls.generates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_search_renders_fallback_with_notice() {
        let (mut controller, calls) = controller(RegatePolicy::Strict);
        controller.submit_credential("slowkey").await;
        controller.take_notices();

        let result = controller.run_search().await.unwrap();
        assert_eq!(result.text, FALLBACK_MESSAGE);
        assert!(result.is_fallback);

        let notices = controller.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert!(notices[0].message.contains("operation timed out"));

        // The fallback is cached too: no second call, no second notice
        let again = controller.run_search().await.unwrap();
        assert!(again.is_fallback);
        assert_eq!(again.text, FALLBACK_MESSAGE);
        assert!(controller.take_notices().is_empty());
        assert_eq!(calls.generates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_credential_surfaces_cause() {
        let (mut controller, _) = controller(RegatePolicy::Strict);
        let outcome = controller.submit_credential("nope").await;
        assert!(matches!(outcome, CredentialOutcome::Rejected(_)));

        let notices = controller.take_notices();
        assert!(notices[0].is_error());
        assert!(notices[0].message.contains("API key not valid"));
        assert!(!controller.is_ready());
    }

    #[tokio::test]
    async fn test_strict_regate_hides_result() {
        let (mut controller, _) = controller(RegatePolicy::Strict);
        controller.submit_credential("validkey").await;
        controller.run_search().await;

        controller.submit_credential("").await;
        let view = controller.view();
        assert_eq!(view.state, "NoCredential");
        assert!(view.result.is_none());
        assert!(!view.trigger_enabled);
    }

    #[tokio::test]
    async fn test_keep_results_regate_keeps_result_visible() {
        let (mut controller, _) = controller(RegatePolicy::KeepResults);
        controller.submit_credential("validkey").await;
        controller.run_search().await;

        controller.submit_credential("").await;
        let view = controller.view();
        assert!(!view.trigger_enabled);
        assert!(!view.selector_enabled);
        assert!(view.result.is_some());
        assert!(controller.run_search().await.is_none());
    }

    #[tokio::test]
    async fn test_cache_is_shared_across_sessions() {
        let calls = Arc::new(Calls::default());
        let cache = Arc::new(ResultCache::new());
        let new_session = || {
            let gateway = Arc::new(MockGateway {
                calls: calls.clone(),
            });
            SessionController::new(
                CredentialStore::new(gateway, CredentialPolicy::ExplicitConfirm),
                cache.clone(),
                SearchClient::new(Model::Gemini25Flash),
                RegatePolicy::Strict,
            )
        };

        let mut first = new_session();
        first.submit_credential("validkey").await;
        first.run_search().await;

        let mut second = new_session();
        second.submit_credential("validkey").await;
        second.run_search().await;

        assert_eq!(calls.generates.load(Ordering::SeqCst), 1);
    }
}
