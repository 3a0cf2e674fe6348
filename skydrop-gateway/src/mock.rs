//! Fixed-shape stub content standing in for a database, plus the injected
//! hash source behind the mocked transaction receipts.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::msg::{ClaimRecord, StatsResponse};

/// Source of mocked transaction hashes. Injected so tests can pin the
/// value instead of depending on wall-clock entropy.
pub trait TxHashSource: Send + Sync {
    fn next(&self) -> String;
}

/// Production source: clock plus a process-local counter, rendered as a
/// 64-hex-char pseudo transaction hash. Not random in any cryptographic
/// sense — nothing downstream treats it as more than display content.
#[derive(Debug, Default)]
pub struct ClockTxHashSource {
    counter: AtomicU64,
}

impl ClockTxHashSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TxHashSource for ClockTxHashSource {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let ms = Utc::now().timestamp_millis() as u64;
        format!(
            "0x{:016x}{:016x}{:016x}{:016x}",
            ms,
            n,
            ms.rotate_left(17) ^ n,
            n.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        )
    }
}

/// Fixed source for tests.
#[derive(Debug, Clone)]
pub struct FixedTxHashSource(pub String);

impl TxHashSource for FixedTxHashSource {
    fn next(&self) -> String {
        self.0.clone()
    }
}

/// Mocked claim statistics around the configured cap.
pub fn stats(total_tokens: u64) -> StatsResponse {
    let claimed_tokens = total_tokens / 4;
    StatsResponse {
        total_tokens,
        claimed_tokens,
        remaining_tokens: total_tokens - claimed_tokens,
        total_claims: 1_284,
    }
}

/// Mocked claims list served behind the bearer guard.
pub fn claims() -> Vec<ClaimRecord> {
    vec![
        ClaimRecord {
            id: 1,
            wallet: "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b".to_string(),
            amount: 500,
            status: "completed".to_string(),
            timestamp: "2026-08-01T09:14:00Z".to_string(),
        },
        ClaimRecord {
            id: 2,
            wallet: "0x9f8e7d6c5b4a3f2e1d0c9b8a7f6e5d4c3b2a1f0e".to_string(),
            amount: 500,
            status: "pending".to_string(),
            timestamp: "2026-08-02T17:42:00Z".to_string(),
        },
        ClaimRecord {
            id: 3,
            wallet: "0x5544332211ffeeddccbbaa998877665544332211".to_string(),
            amount: 750,
            status: "completed".to_string(),
            timestamp: "2026-08-03T11:05:00Z".to_string(),
        },
    ]
}
