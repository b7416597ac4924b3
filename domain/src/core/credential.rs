//! Credential value object

/// A secret string authorizing calls to the generative-language service
/// (Value Object)
///
/// The value is stored trimmed. `Debug` and `Display` never print the
/// secret, so a credential can travel through `tracing` fields safely.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Try to create a credential from raw user or environment input.
    ///
    /// Returns `None` when the input is empty after trimming.
    pub fn try_new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                secret: trimmed.to_string(),
            })
        }
    }

    /// Expose the secret for the single place that needs it: the outbound request.
    pub fn expose(&self) -> &str {
        &self.secret
    }

    /// Masked form suitable for display, e.g. `AIza…9xQ`.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.secret.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 3..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.masked())
    }
}
