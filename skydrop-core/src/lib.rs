//! Core of the SKYDROP claim property: the shared-secret authorization
//! scheme and the referral code/link subsystem, plus the client-scoped
//! caches built on a small key-value port.
//!
//! Everything here is synchronous and stateless per call; the only
//! injected state is the immutable [`config::ClaimConfig`] and whichever
//! [`storage::KeyValueStore`] backend a caller supplies.

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod msg;
pub mod referral;
pub mod session;
pub mod storage;

pub use auth::{SecretSource, TokenVerifier, BEARER_PREFIX};
pub use cache::ReferralCache;
pub use config::{ClaimConfig, DEFAULT_TOTAL_TOKENS};
pub use error::CoreError;
pub use session::AdminSession;
pub use storage::{KeyValueStore, MemoryStore, Slot};
