use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Minimal key-value port behind every piece of client-scoped state.
///
/// The contract is infallible: backends that can fail internally must
/// swallow the failure (logging it) and present it as an absent value.
/// This mirrors how browser storage behaves at this boundary — reads in a
/// context without storage yield nothing rather than erroring.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory backend: the test double and the gateway's process-local
/// attribution store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recover the map even if a holder panicked mid-write; a poisoned
    /// lock must not take the whole store down with it.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

/// Typed view of a single storage key, JSON-encoded.
pub struct Slot<T> {
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Slot<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Absent and undecodable both read as `None`; a corrupt slot is
    /// logged and treated as unknown, not as a hard failure.
    pub fn load<S: KeyValueStore>(&self, store: &S) -> Option<T> {
        let raw = store.get(self.key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = self.key, %err, "discarding undecodable slot value");
                None
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => store.set(self.key, &raw),
            Err(err) => warn!(key = self.key, %err, "failed to encode slot value"),
        }
    }

    pub fn remove<S: KeyValueStore>(&self, store: &S) {
        store.remove(self.key)
    }
}
