//! Expense ledger document: a JSON array of expenses, newest insertion first.

use anyhow::Result;
use log::debug;
use shared::Expense;

use crate::storage::connection::StorageConnection;
use crate::storage::keys::RecordKind;
use crate::storage::traits::ExpenseStorage;

#[derive(Clone)]
pub struct ExpenseRepository {
    connection: StorageConnection,
}

impl ExpenseRepository {
    pub fn new(connection: StorageConnection) -> Self {
        Self { connection }
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn list_expenses(&self, user_id: Option<&str>) -> Result<Vec<Expense>> {
        let expenses: Vec<Expense> = self.connection.load_or_default(RecordKind::Expenses, user_id)?;
        debug!("Loaded {} expenses for {:?}", expenses.len(), user_id);
        Ok(expenses)
    }

    fn save_expenses(&self, user_id: Option<&str>, expenses: &[Expense]) -> Result<()> {
        self.connection.save(RecordKind::Expenses, user_id, expenses)?;
        debug!("Saved {} expenses for {:?}", expenses.len(), user_id);
        Ok(())
    }
}
