use std::sync::Arc;

use crate::auth::{SecretSource, TokenVerifier};
use crate::config::ClaimConfig;
use crate::storage::{KeyValueStore, Slot};

pub const ADMIN_LOGGED_IN_KEY: &str = "admin_logged_in";
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

/// Route the guard redirects to while logged out.
pub const ADMIN_LOGIN_ROUTE: &str = "/admin/login";

const LOGGED_IN: Slot<bool> = Slot::new(ADMIN_LOGGED_IN_KEY);
const TOKEN: Slot<String> = Slot::new(ADMIN_TOKEN_KEY);

/// Combined username/password/token check shared by the session guard and
/// the login endpoint. Returns a bare boolean on purpose: which factor
/// failed is never reported.
pub fn check_admin_login<V: SecretSource>(
    config: &ClaimConfig,
    verifier: &TokenVerifier<V>,
    username: &str,
    password: &str,
    token: &str,
) -> bool {
    let credentials_ok =
        username == config.admin_username() && password == config.admin_password();
    credentials_ok && verifier.verify(token).is_valid
}

/// Two-state authentication guard for the admin views, backed by a
/// session-scoped store.
///
/// One instance owns one session's state (per-tab semantics, matching the
/// session-storage convention of the claim client); two instances over
/// different stores can diverge freely. Authentication is
/// session-duration: the token is checked at login only, never re-checked
/// per admin action. That is a known weakness of the property — the HTTP
/// boundary compensates by re-verifying the bearer token on every
/// protected route.
pub struct AdminSession<S: KeyValueStore> {
    backend: S,
    config: Arc<ClaimConfig>,
    verifier: TokenVerifier<Arc<ClaimConfig>>,
    logged_in: bool,
    token: Option<String>,
}

impl<S: KeyValueStore> AdminSession<S> {
    /// Initial state for a page load: logged in with the cached token if
    /// the session flag says so, logged out otherwise.
    pub fn restore(backend: S, config: Arc<ClaimConfig>) -> Self {
        let logged_in = LOGGED_IN.load(&backend).unwrap_or(false);
        let token = if logged_in {
            TOKEN.load(&backend)
        } else {
            None
        };
        let verifier = TokenVerifier::new(Arc::clone(&config));
        Self {
            backend,
            config,
            verifier,
            logged_in,
            token,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// The admin's copy of the verified secret, retained for display and
    /// reuse only — it is not re-validated per use.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `LoggedOut -> LoggedIn` transition. Both configured credentials and
    /// the token must match; on success the flag and token are persisted
    /// to the session store. Total: any internal failure reads as `false`.
    pub fn login(&mut self, username: &str, password: &str, token: &str) -> bool {
        if !check_admin_login(&self.config, &self.verifier, username, password, token) {
            return false;
        }
        LOGGED_IN.save(&self.backend, &true);
        TOKEN.save(&self.backend, &token.to_string());
        self.logged_in = true;
        self.token = Some(token.to_string());
        true
    }

    /// `LoggedIn -> LoggedOut`. Unconditional and idempotent: clears the
    /// persisted flag and token and resets state.
    pub fn logout(&mut self) {
        LOGGED_IN.remove(&self.backend);
        TOKEN.remove(&self.backend);
        self.logged_in = false;
        self.token = None;
    }

    /// Guard check, run on every navigation: an admin-only route other
    /// than the login route itself, visited while logged out, redirects
    /// to the login route.
    pub fn required_redirect(&self, path: &str) -> Option<&'static str> {
        if self.logged_in {
            return None;
        }
        let admin_route = path == "/admin" || path.starts_with("/admin/");
        if admin_route && path != ADMIN_LOGIN_ROUTE {
            Some(ADMIN_LOGIN_ROUTE)
        } else {
            None
        }
    }
}
