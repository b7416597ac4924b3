//! Gemini gateway: turns a credential into a [`GeminiClient`] handle

use super::client::GeminiClient;
use super::{API_KEY_HEADER, DEFAULT_BASE_URL, error};
use async_trait::async_trait;
use jobscout_application::{GatewayError, LlmClient, LlmGateway};
use jobscout_domain::Credential;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("jobscout/", env!("CARGO_PKG_VERSION"));

/// Gateway to the Gemini REST API
///
/// The HTTP client is built once and shared by every handle. No request
/// timeout is configured; the transport default applies.
pub struct GeminiGateway {
    http: reqwest::Client,
    base_url: String,
    validate_on_connect: bool,
}

impl GeminiGateway {
    pub fn new(base_url: impl Into<String>, validate_on_connect: bool) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into();
        let base_url = if base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base_url.trim().trim_end_matches('/').to_string()
        };

        info!(base_url = %base_url, validate_on_connect, "Gemini gateway initialized");
        Ok(Self {
            http,
            base_url,
            validate_on_connect,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the key with a single cheap model-list call
    async fn validate(&self, credential: &Credential) -> Result<(), GatewayError> {
        let url = format!("{}/v1beta/models", self.base_url);
        debug!("Validating API key");

        let response = self
            .http
            .get(&url)
            .query(&[("pageSize", "1")])
            .header(API_KEY_HEADER, credential.expose())
            .send()
            .await
            .map_err(error::from_transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(error::from_status(status.as_u16(), &body))
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn connect(&self, credential: &Credential) -> Result<Box<dyn LlmClient>, GatewayError> {
        if self.validate_on_connect {
            self.validate(credential).await?;
        }
        Ok(Box::new(GeminiClient::new(
            self.http.clone(),
            self.base_url.clone(),
            credential.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_base_url_uses_default() {
        let gateway = GeminiGateway::new("  ", false).unwrap();
        assert_eq!(gateway.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let gateway = GeminiGateway::new("http://localhost:8080/", false).unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_connect_without_validation_is_offline() {
        let gateway = GeminiGateway::new(DEFAULT_BASE_URL, false).unwrap();
        let credential = Credential::try_new("any-key").unwrap();
        assert!(gateway.connect(&credential).await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_refused_is_connection_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let gateway = GeminiGateway::new("http://127.0.0.1:9", true).unwrap();
        let credential = Credential::try_new("any-key").unwrap();
        let result = gateway.connect(&credential).await;
        assert!(matches!(result, Err(GatewayError::ConnectionError(_))));
    }
}
