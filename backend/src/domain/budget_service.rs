//! Budget ledger operations.
//!
//! Budgets are stored per user as a list. `spent` is never trusted from
//! storage: every read recomputes it as the sum of all expenses in the
//! budget's category, regardless of the budget's period. Limits are stored
//! as given.

use anyhow::Result;
use log::{info, warn};
use shared::{Budget, BudgetStatus, Expense};

use crate::domain::commands::budgets::{CreateBudgetCommand, UpdateBudgetCommand};
use crate::storage::{BudgetRepository, BudgetStorage, ExpenseRepository, ExpenseStorage, StorageConnection};

/// Percentage at which a budget counts as nearly used up
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

#[derive(Clone)]
pub struct BudgetService {
    budget_repository: BudgetRepository,
    expense_repository: ExpenseRepository,
}

impl BudgetService {
    pub fn new(connection: StorageConnection) -> Self {
        Self {
            budget_repository: BudgetRepository::new(connection.clone()),
            expense_repository: ExpenseRepository::new(connection),
        }
    }

    /// All budgets with `spent` recomputed from the expense ledger
    pub fn list_budgets(&self, user_id: Option<&str>) -> Result<Vec<Budget>> {
        let budgets = self.budget_repository.list_budgets(user_id)?;
        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(with_spent(budgets, &expenses))
    }

    pub fn budget_statuses(&self, user_id: Option<&str>) -> Result<Vec<BudgetStatus>> {
        Ok(self.list_budgets(user_id)?.into_iter().map(budget_status).collect())
    }

    pub fn add_budget(&self, user_id: Option<&str>, command: CreateBudgetCommand) -> Result<Budget> {
        info!(
            "Adding {} budget for {} ({:.2}) for {:?}",
            command.period, command.category, command.limit, user_id
        );

        let budget = Budget {
            id: Budget::generate_id(),
            category: command.category,
            limit: command.limit,
            period: command.period,
            spent: 0.0,
        };

        let mut budgets = self.budget_repository.list_budgets(user_id)?;
        budgets.push(budget.clone());
        self.budget_repository.save_budgets(user_id, &budgets)?;
        info!("Created budget {} for {:?}", budget.id, user_id);

        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(with_spent(vec![budget.clone()], &expenses).pop().unwrap_or(budget))
    }

    /// Merge the given fields into an existing budget.
    /// Returns `None` without writing when the id is unknown.
    pub fn update_budget(
        &self,
        user_id: Option<&str>,
        budget_id: &str,
        command: UpdateBudgetCommand,
    ) -> Result<Option<Budget>> {
        info!("Updating budget {} for {:?}", budget_id, user_id);

        let mut budgets = self.budget_repository.list_budgets(user_id)?;
        let budget = match budgets.iter_mut().find(|budget| budget.id == budget_id) {
            Some(budget) => budget,
            None => {
                warn!("Budget {} not found for {:?}, nothing to update", budget_id, user_id);
                return Ok(None);
            }
        };

        if let Some(category) = command.category {
            budget.category = category;
        }
        if let Some(limit) = command.limit {
            budget.limit = limit;
        }
        if let Some(period) = command.period {
            budget.period = period;
        }

        let updated = budget.clone();
        self.budget_repository.save_budgets(user_id, &budgets)?;
        info!("Updated budget {} for {:?}", budget_id, user_id);

        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(with_spent(vec![updated], &expenses).pop())
    }

    /// Remove a budget. Returns whether anything was removed.
    pub fn delete_budget(&self, user_id: Option<&str>, budget_id: &str) -> Result<bool> {
        info!("Deleting budget {} for {:?}", budget_id, user_id);

        let mut budgets = self.budget_repository.list_budgets(user_id)?;
        let before = budgets.len();
        budgets.retain(|budget| budget.id != budget_id);
        let removed = budgets.len() != before;

        self.budget_repository.save_budgets(user_id, &budgets)?;
        if !removed {
            warn!("Budget {} not found for {:?}, nothing deleted", budget_id, user_id);
        }
        Ok(removed)
    }
}

/// Fill each budget's `spent` with the total of its category's expenses
pub fn with_spent(budgets: Vec<Budget>, expenses: &[Expense]) -> Vec<Budget> {
    budgets
        .into_iter()
        .map(|mut budget| {
            budget.spent = expenses
                .iter()
                .filter(|expense| expense.category == budget.category)
                .map(|expense| expense.amount)
                .sum();
            budget
        })
        .collect()
}

pub fn budget_status(budget: Budget) -> BudgetStatus {
    let percentage = if budget.limit > 0.0 {
        budget.spent / budget.limit * 100.0
    } else {
        0.0
    };

    BudgetStatus {
        percentage,
        remaining: budget.limit - budget.spent,
        is_over_budget: percentage >= 100.0,
        is_near_limit: percentage >= NEAR_LIMIT_PERCENT,
        budget,
    }
}
