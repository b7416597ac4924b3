//! Search client
//!
//! Issues exactly one generation call per fetch, with the web search tool
//! attached, and converts every failure into a fixed fallback text so the
//! view always has something to render. There are no retries and no timeout
//! override: the transport default applies.

use crate::ports::llm_gateway::{GatewayError, GenerateRequest, LlmClient};
use jobscout_domain::{JobRequest, Model, Notice};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Text rendered in place of a result when the call fails
pub const FALLBACK_MESSAGE: &str = "죄송합니다. 현재 AI가 구인 정보를 가져올 수 없습니다. \
API 키나 모델 호출 상태를 확인한 뒤 다시 시도해 주세요. \
(The service is temporarily unavailable, please retry.)";

/// Result of one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Raw response text, unmodified
    Fetched(String),
    /// The call failed; `text` is [`FALLBACK_MESSAGE`]
    Fallback { text: String, error: GatewayError },
}

impl FetchOutcome {
    pub fn fallback(error: GatewayError) -> Self {
        FetchOutcome::Fallback {
            text: FALLBACK_MESSAGE.to_string(),
            error,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    /// Text to render, for both variants
    pub fn text(&self) -> &str {
        match self {
            FetchOutcome::Fetched(text) => text,
            FetchOutcome::Fallback { text, .. } => text,
        }
    }

    /// User-visible error notice for a failed call
    pub fn notice(&self) -> Option<Notice> {
        match self {
            FetchOutcome::Fetched(_) => None,
            FetchOutcome::Fallback { error, .. } => Some(Notice::error(format!(
                "Gemini API call failed: {}",
                error
            ))),
        }
    }
}

/// Wraps the outbound call to the generative-language service
#[derive(Debug, Clone)]
pub struct SearchClient {
    model: Model,
    web_search: bool,
}

impl SearchClient {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            web_search: true,
        }
    }

    /// Enable or disable the web search tool
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Fetch listings for a request. Never fails.
    pub async fn fetch(&self, handle: &dyn LlmClient, request: &JobRequest) -> FetchOutcome {
        if self.web_search && !self.model.supports_search_tool() {
            warn!(model = %self.model, "Model may not support the web search tool");
        }

        let generate = GenerateRequest {
            model: self.model.clone(),
            prompt: request.prompt.clone(),
            web_search: self.web_search,
        };

        debug!(
            model = %self.model,
            category = request.category.as_str(),
            web_search = self.web_search,
            "Sending search request"
        );

        let start = Instant::now();
        match handle.generate(&generate).await {
            Ok(text) => {
                info!(
                    category = request.category.as_str(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    chars = text.chars().count(),
                    "Search completed"
                );
                FetchOutcome::Fetched(text)
            }
            Err(e) => {
                warn!(
                    category = request.category.as_str(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Search failed, using fallback: {}",
                    e
                );
                FetchOutcome::fallback(e)
            }
        }
    }
}
