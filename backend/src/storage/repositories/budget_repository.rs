//! Budget ledger document: a JSON array of budgets in insertion order.
//!
//! The stored `spent` value is not authoritative; readers recompute it from
//! the expense ledger.

use anyhow::Result;
use log::debug;
use shared::Budget;

use crate::storage::connection::StorageConnection;
use crate::storage::keys::RecordKind;
use crate::storage::traits::BudgetStorage;

#[derive(Clone)]
pub struct BudgetRepository {
    connection: StorageConnection,
}

impl BudgetRepository {
    pub fn new(connection: StorageConnection) -> Self {
        Self { connection }
    }
}

impl BudgetStorage for BudgetRepository {
    fn list_budgets(&self, user_id: Option<&str>) -> Result<Vec<Budget>> {
        let budgets: Vec<Budget> = self.connection.load_or_default(RecordKind::Budgets, user_id)?;
        debug!("Loaded {} budgets for {:?}", budgets.len(), user_id);
        Ok(budgets)
    }

    fn save_budgets(&self, user_id: Option<&str>, budgets: &[Budget]) -> Result<()> {
        self.connection.save(RecordKind::Budgets, user_id, budgets)
    }
}
