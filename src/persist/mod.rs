//! Durable storage synchronization.
//!
//! The counter outlives its process through an opaque key-value string
//! store: one key per field, written immediately after each successful
//! mutation of that field. This module owns the keys, the field encodings
//! and the recovery rules for whatever is found in storage at startup.

use crate::core::CounterState;
use std::collections::HashMap;

/// Storage key holding the decimal encoding of the count.
pub const COUNT_KEY: &str = "contador_actual";

/// Storage key holding the decimal encoding of the maximum, or the empty
/// string when no maximum is set.
pub const MAX_KEY: &str = "contador_max";

/// Synchronous string key-value store, the counter's durable collaborator.
///
/// Injected into [`CounterStore::new`](crate::store::CounterStore::new)
/// rather than reached for ambiently, so tests can substitute
/// [`MemoryStore`]. Get and set are infallible; a missing key reads as
/// `None`.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// HashMap-backed in-memory store.
///
/// The stand-in for a real durable collaborator in tests and examples.
/// Cloning it snapshots the stored bytes, which is how the tests simulate
/// a process restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Encode the count for storage.
pub fn encode_count(count: u64) -> String {
    count.to_string()
}

/// Decode a stored count. Absent or unparseable values fall back to zero;
/// corrupt storage must never fail the load.
pub fn decode_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Encode the maximum for storage; unset is the empty string.
pub fn encode_max(max: Option<f64>) -> String {
    max.map(|m| m.to_string()).unwrap_or_default()
}

/// Decode a stored maximum. Absent, empty, unparseable, non-finite or
/// negative values all read as unset.
pub fn decode_max(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Rebuild counter state from storage.
///
/// Each field decodes independently with its own fallback, then the
/// cross-field rule is re-validated against whatever survived: a stored
/// maximum below the stored count is treated as absent rather than
/// failing startup.
pub fn load_state(store: &impl KeyValueStore) -> CounterState {
    let count = decode_count(store.get(COUNT_KEY).as_deref());
    let max = decode_max(store.get(MAX_KEY).as_deref()).filter(|m| *m >= count as f64);
    CounterState { count, max }
}

/// Write the count field to storage.
pub fn persist_count(store: &mut impl KeyValueStore, count: u64) {
    store.set(COUNT_KEY, &encode_count(count));
}

/// Write the max field to storage.
pub fn persist_max(store: &mut impl KeyValueStore, max: Option<f64>) {
    store.set(MAX_KEY, &encode_max(max));
}
