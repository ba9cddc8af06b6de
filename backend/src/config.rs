//! # Backend Configuration
//!
//! Settings a host may override, kept as a single YAML file `trackwise.yaml`
//! at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/home/me/Documents/TrackWise"
//! key_prefix: "trackwise"
//! emergency_fund_target_months: 6
//! ```
//!
//! Missing fields take their defaults. The data directory resolves from
//! `TRACKWISE_DATA_DIR`, then `TrackWise` inside the platform's Documents
//! folder, then `~/Documents/TrackWise`.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::keys::DEFAULT_KEY_PREFIX;

pub const CONFIG_FILE_NAME: &str = "trackwise.yaml";
pub const DATA_DIR_ENV: &str = "TRACKWISE_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Where the JSON record files live
    pub data_directory: PathBuf,
    /// Prefix of every storage key
    pub key_prefix: String,
    /// Emergency fund goal for users without saved data
    pub emergency_fund_target_months: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(
                std::env::var(DATA_DIR_ENV).ok(),
                dirs::document_dir(),
                dirs::home_dir(),
            ),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            emergency_fund_target_months: shared::DEFAULT_TARGET_MONTHS,
        }
    }
}

impl BackendConfig {
    /// Defaults resolved from the environment, overlaid with
    /// `trackwise.yaml` from that data directory if one exists.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let directory = defaults.data_directory.clone();
        match Self::read_file(&directory)? {
            Some(config) => Ok(config),
            None => Ok(defaults),
        }
    }

    /// Read `trackwise.yaml` from `directory`, or defaults pointing at it
    pub fn load<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref();
        match Self::read_file(directory)? {
            Some(config) => Ok(config),
            None => {
                debug!("No {} in {:?}, using defaults", CONFIG_FILE_NAME, directory);
                Ok(Self {
                    data_directory: directory.to_path_buf(),
                    ..Self::default()
                })
            }
        }
    }

    fn read_file(directory: &Path) -> Result<Option<Self>> {
        let config_path = directory.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let yaml_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {:?}", config_path))?;
        let config: BackendConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {:?}", config_path))?;
        debug!("Loaded backend config from {:?}", config_path);
        Ok(Some(config))
    }

    /// Write `trackwise.yaml` into `directory`
    pub fn save<P: AsRef<Path>>(&self, directory: P) -> Result<()> {
        let directory = directory.as_ref();
        if !directory.exists() {
            fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create data directory {:?}", directory))?;
            info!("Created data directory: {:?}", directory);
        }

        let config_path = directory.join(CONFIG_FILE_NAME);
        let yaml_content = serde_yaml::to_string(self)?;

        // Write to temp file, then rename
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content).with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &config_path).with_context(|| format!("Failed to replace {:?}", config_path))?;

        debug!("Saved backend config to {:?}", config_path);
        Ok(())
    }
}

fn default_data_directory(override_dir: Option<String>, documents: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(dir);
    }
    match (documents, home) {
        (Some(documents), _) => documents.join("TrackWise"),
        // Fallback to home directory if Documents not available
        (None, Some(home)) => home.join("Documents").join("TrackWise"),
        (None, None) => {
            warn!("Could not determine a Documents or home directory, using the temp directory");
            std::env::temp_dir().join("TrackWise")
        }
    }
}
