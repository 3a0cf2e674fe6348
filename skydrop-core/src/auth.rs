use std::sync::Arc;

use tracing::warn;

use crate::config::ClaimConfig;
use crate::error::CoreError;
use crate::msg::AuthResult;

/// Required scheme prefix on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Where the verifier reads the shared secret from.
///
/// `ClaimConfig` is the production source and cannot fail; the seam exists
/// so tests can simulate an unavailable configuration subsystem and assert
/// the fail-closed behavior.
pub trait SecretSource {
    fn secret(&self) -> Result<String, CoreError>;
}

impl SecretSource for ClaimConfig {
    fn secret(&self) -> Result<String, CoreError> {
        Ok(self.secret_token().to_string())
    }
}

impl<S: SecretSource> SecretSource for Arc<S> {
    fn secret(&self) -> Result<String, CoreError> {
        (**self).secret()
    }
}

/// Constant-shape comparison of a caller-supplied token against the
/// configured secret. Stateless per call; verification is total — it
/// always returns an `AuthResult` and never propagates an error.
#[derive(Clone)]
pub struct TokenVerifier<S: SecretSource> {
    source: S,
}

impl<S: SecretSource> TokenVerifier<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Exact equality against the stored secret. Empty or absent input is
    /// a non-match, not an error; no trimming, no case folding. A failing
    /// secret source is logged and treated as a non-match.
    pub fn verify(&self, provided: &str) -> AuthResult {
        let is_valid = match self.source.secret() {
            Ok(secret) => provided == secret,
            Err(err) => {
                warn!(%err, "secret lookup failed; rejecting token");
                false
            }
        };
        AuthResult { is_valid }
    }

    /// Validate a raw `Authorization` header value. A missing header, a
    /// missing `Bearer ` prefix, and a mismatched token are all equally
    /// unauthorized — callers get no signal about which check failed.
    pub fn authorize_bearer(&self, header: Option<&str>) -> AuthResult {
        match header.and_then(|value| value.strip_prefix(BEARER_PREFIX)) {
            Some(token) => self.verify(token),
            None => AuthResult { is_valid: false },
        }
    }
}
