use std::env;

use tracing::warn;

use crate::msg::{TokenInfoResponse, TotalTokensResponse};

/// Distribution cap applied when `TOTAL_TOKENS` is unset or unparsable.
pub const DEFAULT_TOTAL_TOKENS: u64 = 1_000_000;

/// Immutable process configuration for the claim property.
///
/// Loaded once (from the environment or explicitly in tests) and injected
/// into every consumer; nothing reads ambient process state at request
/// time. The secret is held here and compared by the verifier — it is
/// never transmitted except as the value a caller must match.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimConfig {
    secret_token: String,
    total_tokens: u64,
    admin_username: String,
    admin_password: String,
    public_base_url: Option<String>,
}

impl ClaimConfig {
    pub fn new(
        secret_token: impl Into<String>,
        total_tokens: u64,
        admin_username: impl Into<String>,
        admin_password: impl Into<String>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            secret_token: secret_token.into(),
            total_tokens,
            admin_username: admin_username.into(),
            admin_password: admin_password.into(),
            public_base_url,
        }
    }

    /// Load from the process environment. Every value has a fail-closed
    /// default: empty strings for credentials and the secret (an empty
    /// secret only matches an empty token), `DEFAULT_TOTAL_TOKENS` for
    /// the cap.
    pub fn from_env() -> Self {
        let total_tokens = match env::var("TOTAL_TOKENS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(%raw, "TOTAL_TOKENS is not a number; using default cap");
                DEFAULT_TOTAL_TOKENS
            }),
            Err(_) => DEFAULT_TOTAL_TOKENS,
        };

        Self {
            secret_token: env::var("SECRET_TOKEN").unwrap_or_default(),
            total_tokens,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_default(),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
            public_base_url: env::var("PUBLIC_BASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn secret_token(&self) -> &str {
        &self.secret_token
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }

    /// Public accessor: the cap only. Safe to expose anywhere.
    pub fn total_supply(&self) -> TotalTokensResponse {
        TotalTokensResponse {
            total_tokens: self.total_tokens,
        }
    }

    /// Trusted accessor: cap plus the raw secret. Callers must keep the
    /// result out of any user-reachable response.
    pub fn token_info(&self) -> TokenInfoResponse {
        TokenInfoResponse {
            total_tokens: self.total_tokens,
            token: self.secret_token.clone(),
        }
    }
}
