//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! All operations are synchronous. `user_id` selects the namespace; `None`
//! addresses the un-namespaced key used before anyone signs in.

use anyhow::Result;
use shared::{Budget, Expense, GamificationData, User};

/// Raw key-value substrate holding serialized JSON documents
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for a key, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value for a key
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key
    /// Returns true if the key existed
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Trait defining the interface for the expense ledger document
pub trait ExpenseStorage: Send + Sync {
    /// Load the whole ledger, most recent insertion first
    fn list_expenses(&self, user_id: Option<&str>) -> Result<Vec<Expense>>;

    /// Replace the whole ledger
    fn save_expenses(&self, user_id: Option<&str>, expenses: &[Expense]) -> Result<()>;
}

/// Trait defining the interface for the budget ledger document
pub trait BudgetStorage: Send + Sync {
    /// Load the whole ledger in insertion order
    fn list_budgets(&self, user_id: Option<&str>) -> Result<Vec<Budget>>;

    /// Replace the whole ledger
    fn save_budgets(&self, user_id: Option<&str>, budgets: &[Budget]) -> Result<()>;
}

/// Trait defining the interface for the per-user gamification aggregate
pub trait GamificationStorage: Send + Sync {
    /// Load the aggregate, `None` if it was never saved
    fn get_gamification_data(&self, user_id: Option<&str>) -> Result<Option<GamificationData>>;

    fn save_gamification_data(&self, user_id: Option<&str>, data: &GamificationData) -> Result<()>;
}

/// Trait defining the interface for the signed-in user record
pub trait UserStorage: Send + Sync {
    fn get_user(&self) -> Result<Option<User>>;

    fn save_user(&self, user: &User) -> Result<()>;

    /// Returns true if a user was stored
    fn clear_user(&self) -> Result<bool>;
}
