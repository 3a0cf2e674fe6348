use std::sync::Arc;

use skydrop_core::{ClaimConfig, MemoryStore, ReferralCache, TokenVerifier};

use crate::mock::{ClockTxHashSource, TxHashSource};

/// Shared application state threaded through axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ClaimConfig>,
    pub verifier: TokenVerifier<Arc<ClaimConfig>>,
    /// Process-local referral attribution, behind the same key-value port
    /// the claim client uses for its durable storage.
    pub referrals: ReferralCache<Arc<MemoryStore>>,
    pub tx_hashes: Arc<dyn TxHashSource>,
}

impl AppState {
    pub fn new(config: Arc<ClaimConfig>) -> Self {
        Self::with_hash_source(config, Arc::new(ClockTxHashSource::new()))
    }

    pub fn with_hash_source(config: Arc<ClaimConfig>, tx_hashes: Arc<dyn TxHashSource>) -> Self {
        let verifier = TokenVerifier::new(Arc::clone(&config));
        let referrals = ReferralCache::new(Arc::new(MemoryStore::new()));
        Self {
            config,
            verifier,
            referrals,
            tx_hashes,
        }
    }
}
