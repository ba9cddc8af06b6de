//! Typed JSON access over a `KeyValueStore`.
//!
//! This is the persistence adapter shared by every repository: it resolves
//! namespaced keys, serializes records with `serde_json`, and hands storage
//! failures back unchanged.

use anyhow::Result;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::error::StorageError;
use super::keys::{RecordKind, StorageKeys};
use super::traits::KeyValueStore;

#[derive(Clone)]
pub struct StorageConnection {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl StorageConnection {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Load a record, `None` if its key was never written
    pub fn load<T: DeserializeOwned>(&self, record: RecordKind, user_id: Option<&str>) -> Result<Option<T>> {
        let key = self.keys.key_for(record, user_id);
        let raw = match self.store.get(&key)? {
            Some(raw) => raw,
            None => {
                debug!("No stored value for '{}'", key);
                return Ok(None);
            }
        };

        let value = serde_json::from_str(&raw).map_err(|source| StorageError::Serialization {
            key: key.clone(),
            source,
        })?;
        debug!("Loaded '{}' ({} bytes)", key, raw.len());
        Ok(Some(value))
    }

    /// Load a record or fall back to its default value
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, record: RecordKind, user_id: Option<&str>) -> Result<T> {
        Ok(self.load(record, user_id)?.unwrap_or_default())
    }

    pub fn save<T: Serialize + ?Sized>(&self, record: RecordKind, user_id: Option<&str>, value: &T) -> Result<()> {
        let key = self.keys.key_for(record, user_id);
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialization {
            key: key.clone(),
            source,
        })?;
        self.store.set(&key, &raw)?;
        debug!("Saved '{}' ({} bytes)", key, raw.len());
        Ok(())
    }

    pub fn remove(&self, record: RecordKind, user_id: Option<&str>) -> Result<bool> {
        let key = self.keys.key_for(record, user_id);
        let removed = self.store.remove(&key)?;
        debug!("Removed '{}': {}", key, removed);
        Ok(removed)
    }
}
