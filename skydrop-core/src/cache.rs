use chrono::Utc;

use crate::msg::StoredReferral;
use crate::storage::{KeyValueStore, Slot};

pub const REFERRAL_CODE_KEY: &str = "referral_code";
pub const REFERRAL_WALLET_KEY: &str = "referral_wallet";
pub const REFERRAL_TIMESTAMP_KEY: &str = "referral_timestamp";

const CODE: Slot<String> = Slot::new(REFERRAL_CODE_KEY);
const WALLET: Slot<String> = Slot::new(REFERRAL_WALLET_KEY);
const TIMESTAMP: Slot<i64> = Slot::new(REFERRAL_TIMESTAMP_KEY);

/// Durable referral attribution over three independently-addressable
/// slots.
///
/// The slots are written in sequence, not atomically, so a reader that
/// interleaves with `store`/`clear` can observe a torn record. Callers
/// must treat any individually-absent field as unknown and never infer
/// the others from it.
pub struct ReferralCache<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> ReferralCache<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Overwrite the attribution unconditionally — no merge, no
    /// versioning. The timestamp is the current time in unix millis.
    pub fn store(&self, code: &str, wallet: &str) {
        CODE.save(&self.backend, &code.to_string());
        WALLET.save(&self.backend, &wallet.to_string());
        TIMESTAMP.save(&self.backend, &Utc::now().timestamp_millis());
    }

    /// Read the three slots independently. Never fails: absent slots read
    /// as `None`, and a backend without the data yields an all-`None`
    /// record.
    pub fn get_stored(&self) -> StoredReferral {
        StoredReferral {
            code: CODE.load(&self.backend),
            wallet: WALLET.load(&self.backend),
            timestamp: TIMESTAMP.load(&self.backend),
        }
    }

    /// Remove all three slots. Idempotent.
    pub fn clear(&self) {
        CODE.remove(&self.backend);
        WALLET.remove(&self.backend);
        TIMESTAMP.remove(&self.backend);
    }
}

impl<S: KeyValueStore + Clone> Clone for ReferralCache<S> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
        }
    }
}
