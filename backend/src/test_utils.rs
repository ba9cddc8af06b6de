/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// `TestEnvironment` owns a temporary data directory that is removed when the
/// environment is dropped, even if the test panics. `ServiceTestHelper` wires
/// every service to that one environment.

use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use shared::{Expense, ExpenseCategory};
use std::sync::Arc;
use tempfile::TempDir;

use crate::domain::{AnalyticsService, BudgetService, ExpenseService, GamificationService, SessionService};
use crate::storage::{BudgetRepository, ExpenseRepository, JsonFileStore, MemoryStore, StorageConnection, StorageKeys};

/// File-backed test environment
pub struct TestEnvironment {
    pub store: Arc<JsonFileStore>,
    pub connection: StorageConnection,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

/// Test helper that provides repository and service instances for a test environment
pub struct ServiceTestHelper {
    pub env: TestEnvironment,
    pub expense_repo: ExpenseRepository,
    pub budget_repo: BudgetRepository,
    pub expense_service: ExpenseService,
    pub budget_service: BudgetService,
    pub gamification_service: GamificationService,
    pub analytics_service: AnalyticsService,
    pub session_service: SessionService,
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let store = Arc::new(JsonFileStore::new(temp_dir.path())?);
        let connection = StorageConnection::new(store.clone(), StorageKeys::default());
        Ok(Self {
            store,
            connection,
            _temp_dir: temp_dir,
        })
    }
}

impl ServiceTestHelper {
    /// Create a new test helper with a fresh environment and a 6 month target
    pub fn new() -> Result<Self> {
        Self::with_target_months(shared::DEFAULT_TARGET_MONTHS)
    }

    pub fn with_target_months(target_months: u32) -> Result<Self> {
        let env = TestEnvironment::new()?;
        let connection = env.connection.clone();

        let gamification_service = GamificationService::new(connection.clone(), target_months);
        let expense_service = ExpenseService::new(connection.clone(), gamification_service.clone());

        Ok(Self {
            expense_repo: ExpenseRepository::new(connection.clone()),
            budget_repo: BudgetRepository::new(connection.clone()),
            expense_service,
            budget_service: BudgetService::new(connection.clone()),
            gamification_service,
            analytics_service: AnalyticsService::new(connection.clone()),
            session_service: SessionService::new(connection),
            env,
        })
    }

    /// Services over the same directory, as after a restart
    pub fn reopen(&self) -> ExpenseService {
        let gamification_service =
            GamificationService::new(self.env.connection.clone(), shared::DEFAULT_TARGET_MONTHS);
        ExpenseService::new(self.env.connection.clone(), gamification_service)
    }
}

/// Connection over a fresh in-memory store
pub fn memory_connection() -> StorageConnection {
    StorageConnection::new(Arc::new(MemoryStore::new()), StorageKeys::default())
}

/// Build an expense dated `date` (YYYY-MM-DD) with a fresh id
pub fn sample_expense(title: &str, amount: f64, category: ExpenseCategory, date: &str) -> Expense {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("Invalid test date");
    Expense {
        id: Expense::generate_id(),
        title: title.to_string(),
        amount,
        category,
        date,
        description: None,
        created_at: Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).expect("Invalid test time")),
    }
}
