//! Mapping of HTTP and transport failures to [`GatewayError`]

use super::types::ErrorEnvelope;
use jobscout_application::GatewayError;

/// Map a non-success HTTP status and its body to a gateway error
pub fn from_status(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| truncate(body.trim(), 200));

    let detail = format!("HTTP {}: {}", status, message);
    match status {
        401 | 403 => GatewayError::Unauthorized(detail),
        400 if message.to_lowercase().contains("api key") => GatewayError::Unauthorized(detail),
        429 => GatewayError::QuotaExceeded(detail),
        408 | 504 => GatewayError::Timeout(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

/// Map a reqwest transport error to a gateway error
pub fn from_transport(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout(error.to_string())
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else if error.is_decode() {
        GatewayError::MalformedResponse(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
