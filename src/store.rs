//! Persistent per-counter sample store.
//!
//! Rate derivation needs the previous (timestamp, value) observation of
//! every counter. One store exists per monitored resolver instance and
//! is carried across monitoring cycles; the CLI persists it as a JSON
//! file between invocations.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Last observed (timestamp, value) pair per state key.
///
/// State keys identify one logical counter each (for example
/// `unbound_cache_hits`); keys for concurrent counters must never
/// collide. Entries are overwritten on every new observation and never
/// expire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueStore {
    entries: BTreeMap<String, (f64, f64)>,
}

impl ValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The previously stored (timestamp, value) for a state key.
    pub fn get(&self, key: &str) -> Option<(f64, f64)> {
        self.entries.get(key).copied()
    }

    /// Store the observation for a state key, replacing any previous one.
    pub fn set(&mut self, key: &str, timestamp: f64, value: f64) {
        self.entries.insert(key.to_string(), (timestamp, value));
    }

    /// Number of tracked counters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no counter has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a store from a JSON file.
    ///
    /// A missing file is a fresh start, not an error: the first
    /// invocation on a host has no history yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no state file yet, starting empty");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read state file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse state file {}", path.display()))
    }

    /// Persist the store to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write state file {}", path.display()))
    }
}
