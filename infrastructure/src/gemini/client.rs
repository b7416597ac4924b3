//! Gemini client handle: one authenticated connection

use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::{API_KEY_HEADER, error};
use async_trait::async_trait;
use jobscout_application::{GatewayError, GenerateRequest, LlmClient};
use jobscout_domain::Credential;
use tracing::debug;

/// Authenticated handle produced by [`GeminiGateway::connect`](super::gateway::GeminiGateway)
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl GeminiClient {
    pub(crate) fn new(http: reqwest::Client, base_url: String, credential: Credential) -> Self {
        Self {
            http,
            base_url,
            credential,
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let url = self.generate_url(request.model.as_str());
        let body = GenerateContentRequest::user_prompt(&request.prompt, request.web_search);

        debug!(model = %request.model, web_search = request.web_search, "POST generateContent");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(error::from_transport)?;

        let status = response.status();
        let text = response.text().await.map_err(error::from_transport)?;
        if !status.is_success() {
            return Err(error::from_status(status.as_u16(), &text));
        }

        extract_text(&text)
    }
}

/// Concatenate the text parts of the first candidate.
///
/// The text is returned as-is; markdown structure is not inspected.
pub fn extract_text(body: &str) -> Result<String, GatewayError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let Some(candidate) = parsed.candidates.first() else {
        let reason = parsed
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("prompt blocked ({})", r))
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(GatewayError::MalformedResponse(reason));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .as_deref()
            .unwrap_or("unknown finish reason");
        return Err(GatewayError::MalformedResponse(format!(
            "candidate has no text ({})",
            reason
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_concatenates_parts() {
        let body = r#"{
          "candidates": [{
            "content": {
              "role": "model",
              "parts": [{"text": "| 공고 | 임금 |\n"}, {"text": "|---|---|\n| A | N/A |"}]
            },
            "finishReason": "STOP"
          }]
        }"#;
        assert_eq!(
            extract_text(body).unwrap(),
            "| 공고 | 임금 |\n|---|---|\n| A | N/A |"
        );
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert_eq!(
            extract_text(body),
            Err(GatewayError::MalformedResponse("prompt blocked (SAFETY)".to_string()))
        );
    }

    #[test]
    fn test_extract_text_empty_candidate() {
        let body = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        assert_eq!(
            extract_text(body),
            Err(GatewayError::MalformedResponse(
                "candidate has no text (MAX_TOKENS)".to_string()
            ))
        );
    }

    #[test]
    fn test_extract_text_invalid_json() {
        assert!(matches!(
            extract_text("not json"),
            Err(GatewayError::MalformedResponse(m)) if m.starts_with("invalid JSON")
        ));
    }

    #[test]
    fn test_generate_url() {
        let client = GeminiClient::new(
            reqwest::Client::new(),
            "https://example.test/".to_string(),
            Credential::try_new("key").unwrap(),
        );
        assert_eq!(
            client.generate_url("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
