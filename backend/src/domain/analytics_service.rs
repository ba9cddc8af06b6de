//! Read-only spending views over a user's ledgers.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::debug;
use shared::{CategoryShare, CategoryTotal, DashboardSummary, MonthlyTrendPoint, SpendingStats};

use crate::domain::analytics;
use crate::storage::{BudgetRepository, BudgetStorage, ExpenseRepository, ExpenseStorage, StorageConnection};

#[derive(Clone)]
pub struct AnalyticsService {
    expense_repository: ExpenseRepository,
    budget_repository: BudgetRepository,
}

impl AnalyticsService {
    pub fn new(connection: StorageConnection) -> Self {
        Self {
            expense_repository: ExpenseRepository::new(connection.clone()),
            budget_repository: BudgetRepository::new(connection),
        }
    }

    pub fn category_totals(&self, user_id: Option<&str>) -> Result<Vec<CategoryTotal>> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(analytics::category_totals(&expenses))
    }

    pub fn category_shares(&self, user_id: Option<&str>) -> Result<Vec<CategoryShare>> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(analytics::category_shares(&expenses))
    }

    pub fn spending_stats(&self, user_id: Option<&str>) -> Result<SpendingStats> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        let stats = analytics::spending_stats(&expenses);
        debug!(
            "Spending stats for {:?}: total={:.2}, count={}",
            user_id, stats.total_spent, stats.transaction_count
        );
        Ok(stats)
    }

    pub fn monthly_trend(&self, user_id: Option<&str>) -> Result<Vec<MonthlyTrendPoint>> {
        self.monthly_trend_on(user_id, Utc::now().date_naive())
    }

    pub fn monthly_trend_on(&self, user_id: Option<&str>, today: NaiveDate) -> Result<Vec<MonthlyTrendPoint>> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        Ok(analytics::monthly_trend(&expenses, today))
    }

    pub fn dashboard_summary(&self, user_id: Option<&str>) -> Result<DashboardSummary> {
        self.dashboard_summary_on(user_id, Utc::now().date_naive())
    }

    pub fn dashboard_summary_on(&self, user_id: Option<&str>, today: NaiveDate) -> Result<DashboardSummary> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        let budgets = self.budget_repository.list_budgets(user_id)?;
        Ok(analytics::dashboard_summary(&expenses, &budgets, today))
    }
}
