//! # TrackWise Backend
//!
//! Synchronous core of the TrackWise expense tracker: the expense and budget
//! ledgers, the streak and badge engine, spending analytics and a
//! key-value persistence adapter with per-user namespacing.
//!
//! A host builds one [`Backend`] and calls its services directly. Every
//! per-user operation takes `user_id: Option<&str>`; `None` reads and writes
//! the un-namespaced keys.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod logging;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

pub use config::BackendConfig;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageConnection, StorageKeys};

/// Main backend struct that wires storage into every service
pub struct Backend {
    pub config: BackendConfig,
    pub session_service: domain::SessionService,
    pub expense_service: domain::ExpenseService,
    pub budget_service: domain::BudgetService,
    pub gamification_service: domain::GamificationService,
    pub analytics_service: domain::AnalyticsService,
}

impl Backend {
    /// Backend over the data directory resolved from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(BackendConfig::from_env()?)
    }

    /// Backend over a `JsonFileStore` in `config.data_directory`
    pub fn with_config(config: BackendConfig) -> Result<Self> {
        let store = Arc::new(JsonFileStore::new(&config.data_directory)?);
        info!("Using data directory {:?}", config.data_directory);
        Ok(Self::with_store(config, store))
    }

    /// Backend over any key-value store
    pub fn with_store(config: BackendConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let connection = StorageConnection::new(store, StorageKeys::new(config.key_prefix.clone()));

        let gamification_service =
            domain::GamificationService::new(connection.clone(), config.emergency_fund_target_months);
        let expense_service = domain::ExpenseService::new(connection.clone(), gamification_service.clone());
        let budget_service = domain::BudgetService::new(connection.clone());
        let analytics_service = domain::AnalyticsService::new(connection.clone());
        let session_service = domain::SessionService::new(connection);

        Backend {
            config,
            session_service,
            expense_service,
            budget_service,
            gamification_service,
            analytics_service,
        }
    }
}
