//! Expense ledger operations.
//!
//! The ledger is one ordered list per user with the newest insertion first.
//! Logging an expense also counts as the day's activity for the streak.
//!
//! Fields are stored as given. Input checks belong to the caller, which can
//! use the commands' `validate()` before handing them over.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use shared::Expense;

use crate::domain::commands::expenses::{AddExpenseResult, CreateExpenseCommand, UpdateExpenseCommand};
use crate::domain::gamification_service::GamificationService;
use crate::domain::streak::activity_day;
use crate::storage::{ExpenseRepository, ExpenseStorage, StorageConnection};

#[derive(Clone)]
pub struct ExpenseService {
    expense_repository: ExpenseRepository,
    gamification_service: GamificationService,
}

impl ExpenseService {
    pub fn new(connection: StorageConnection, gamification_service: GamificationService) -> Self {
        Self {
            expense_repository: ExpenseRepository::new(connection),
            gamification_service,
        }
    }

    /// All expenses, newest insertion first
    pub fn list_expenses(&self, user_id: Option<&str>) -> Result<Vec<Expense>> {
        self.expense_repository.list_expenses(user_id)
    }

    pub fn get_expense(&self, user_id: Option<&str>, expense_id: &str) -> Result<Option<Expense>> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(expenses.into_iter().find(|expense| expense.id == expense_id))
    }

    pub fn add_expense(&self, user_id: Option<&str>, command: CreateExpenseCommand) -> Result<AddExpenseResult> {
        self.add_expense_at(user_id, command, Utc::now())
    }

    /// Log an expense created at `now` and record that day's activity
    pub fn add_expense_at(
        &self,
        user_id: Option<&str>,
        command: CreateExpenseCommand,
        now: DateTime<Utc>,
    ) -> Result<AddExpenseResult> {
        info!("Adding expense '{}' ({:.2}, {}) for {:?}", command.title, command.amount, command.category, user_id);

        let expense = Expense {
            id: Expense::generate_id(),
            title: command.title,
            amount: command.amount,
            category: command.category,
            date: command.date,
            description: command.description,
            created_at: now,
        };

        let mut expenses = self.expense_repository.list_expenses(user_id)?;
        expenses.insert(0, expense.clone());
        self.expense_repository.save_expenses(user_id, &expenses)?;
        info!("Created expense {} for {:?}", expense.id, user_id);

        let activity = self.gamification_service.record_activity_on(user_id, activity_day(now))?;

        Ok(AddExpenseResult {
            expense,
            streak_update: activity.streak_update,
            awarded_badges: activity.awarded_badges,
        })
    }

    /// Merge the given fields into an existing expense.
    /// Returns `None` without writing when the id is unknown.
    pub fn update_expense(
        &self,
        user_id: Option<&str>,
        expense_id: &str,
        command: UpdateExpenseCommand,
    ) -> Result<Option<Expense>> {
        info!("Updating expense {} for {:?}", expense_id, user_id);

        let mut expenses = self.expense_repository.list_expenses(user_id)?;
        let expense = match expenses.iter_mut().find(|expense| expense.id == expense_id) {
            Some(expense) => expense,
            None => {
                warn!("Expense {} not found for {:?}, nothing to update", expense_id, user_id);
                return Ok(None);
            }
        };

        if let Some(title) = command.title {
            expense.title = title;
        }
        if let Some(amount) = command.amount {
            expense.amount = amount;
        }
        if let Some(category) = command.category {
            expense.category = category;
        }
        if let Some(date) = command.date {
            expense.date = date;
        }
        if let Some(description) = command.description {
            expense.description = Some(description);
        }

        let updated = expense.clone();
        self.expense_repository.save_expenses(user_id, &expenses)?;
        info!("Updated expense {} for {:?}", expense_id, user_id);
        Ok(Some(updated))
    }

    /// Remove an expense. Returns whether anything was removed.
    pub fn delete_expense(&self, user_id: Option<&str>, expense_id: &str) -> Result<bool> {
        info!("Deleting expense {} for {:?}", expense_id, user_id);

        let mut expenses = self.expense_repository.list_expenses(user_id)?;
        let before = expenses.len();
        expenses.retain(|expense| expense.id != expense_id);
        let removed = expenses.len() != before;

        self.expense_repository.save_expenses(user_id, &expenses)?;
        if !removed {
            warn!("Expense {} not found for {:?}, nothing deleted", expense_id, user_id);
        }
        Ok(removed)
    }
}
