//! Process-local key-value store.
//!
//! Mirrors a browser storage area: values live as strings, and an optional
//! byte quota rejects writes that would push the total size of keys plus
//! values over the limit.

use anyhow::Result;
use log::debug;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::error::StorageError;
use super::traits::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Snapshot of the stored keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn used_bytes(&self) -> usize {
        Self::size_of(&self.lock())
    }

    fn size_of(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.lock();

        if let Some(limit) = self.quota_bytes {
            let current = Self::size_of(&entries);
            let replaced = entries.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let needed = current - replaced + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                }
                .into());
            }
        }

        entries.insert(key.to_string(), value.to_string());
        debug!("Memory store set '{}'", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.lock().remove(key).is_some())
    }
}
