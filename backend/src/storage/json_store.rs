//! # JSON File Store
//!
//! File-backed `KeyValueStore`: each key is one `<key>.json` file inside the
//! data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── trackwise.yaml
//! ├── trackwise_user.json
//! ├── trackwise_expenses_<user id>.json
//! ├── trackwise_budgets_<user id>.json
//! └── trackwise_gamification_<user id>.json
//! ```
//!
//! Writes go to a temp file first and are then renamed over the target.

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::StorageError;
use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|source| StorageError::Unavailable {
                path: base_path.clone(),
                source,
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self { base_directory: base_path })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File path for a key. The key is percent-encoded, so distinct keys
    /// never share a file and `/` cannot leave the directory.
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", urlencoding::encode(key)))
    }
}

fn unavailable(path: &Path, source: io::Error) -> StorageError {
    StorageError::Unavailable {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(&path, e).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for_key(key);

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).map_err(|e| unavailable(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| unavailable(&path, e))?;

        debug!("Wrote '{}' to {:?}", key, path);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for_key(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(unavailable(&path, e).into()),
        }
    }
}
