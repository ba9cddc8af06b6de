//! Domain-level command and result types.
//!
//! The presentation layer builds these from its form input (parsing
//! categories and periods at the boundary) and hands them to the services.

pub mod expenses {
    use chrono::NaiveDate;
    use shared::{Badge, Expense, ExpenseCategory};

    use crate::domain::validation::{validate_amount, validate_title, ValidationError};
    use crate::domain::StreakUpdate;

    /// Input for logging a new expense.
    #[derive(Debug, Clone)]
    pub struct CreateExpenseCommand {
        pub title: String,
        pub amount: f64,
        pub category: ExpenseCategory,
        pub date: NaiveDate,
        pub description: Option<String>,
    }

    impl CreateExpenseCommand {
        pub fn validate(&self) -> Result<(), ValidationError> {
            validate_title(&self.title)?;
            validate_amount(self.amount)
        }
    }

    /// Partial update; `None` leaves a field unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateExpenseCommand {
        pub title: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<ExpenseCategory>,
        pub date: Option<NaiveDate>,
        pub description: Option<String>,
    }

    impl UpdateExpenseCommand {
        pub fn validate(&self) -> Result<(), ValidationError> {
            if let Some(title) = &self.title {
                validate_title(title)?;
            }
            if let Some(amount) = self.amount {
                validate_amount(amount)?;
            }
            Ok(())
        }
    }

    /// Result of logging an expense.
    #[derive(Debug, Clone)]
    pub struct AddExpenseResult {
        pub expense: Expense,
        pub streak_update: StreakUpdate,
        pub awarded_badges: Vec<Badge>,
    }
}

pub mod budgets {
    use shared::{BudgetPeriod, ExpenseCategory};

    use crate::domain::validation::{validate_limit, ValidationError};

    /// Input for creating a budget.
    #[derive(Debug, Clone)]
    pub struct CreateBudgetCommand {
        pub category: ExpenseCategory,
        pub limit: f64,
        pub period: BudgetPeriod,
    }

    impl CreateBudgetCommand {
        pub fn validate(&self) -> Result<(), ValidationError> {
            validate_limit(self.limit)
        }
    }

    /// Partial update; `None` leaves a field unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateBudgetCommand {
        pub category: Option<ExpenseCategory>,
        pub limit: Option<f64>,
        pub period: Option<BudgetPeriod>,
    }

    impl UpdateBudgetCommand {
        pub fn validate(&self) -> Result<(), ValidationError> {
            match self.limit {
                Some(limit) => validate_limit(limit),
                None => Ok(()),
            }
        }
    }
}

pub mod gamification {
    use shared::{Badge, GamificationData};

    use crate::domain::StreakUpdate;

    /// Result of recording an activity event.
    #[derive(Debug, Clone)]
    pub struct RecordActivityResult {
        pub data: GamificationData,
        pub streak_update: StreakUpdate,
        pub awarded_badges: Vec<Badge>,
    }

    /// Result of updating the emergency fund.
    #[derive(Debug, Clone)]
    pub struct UpdateEmergencyFundResult {
        pub data: GamificationData,
        pub awarded_badges: Vec<Badge>,
    }
}

pub mod session {
    /// Input for creating a new account.
    #[derive(Debug, Clone)]
    pub struct SignUpCommand {
        pub email: String,
        pub password: String,
        pub name: String,
    }
}
