use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Emergency fund goal used when no configuration overrides it
pub const DEFAULT_TARGET_MONTHS: u32 = 6;

/// The signed-in user. Its id selects the storage namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Travel,
    Bills,
    Shopping,
    Entertainment,
    Health,
    Education,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Food,
        ExpenseCategory::Travel,
        ExpenseCategory::Bills,
        ExpenseCategory::Shopping,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown expense category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID in format: "expense::<uuid v4>"
    pub id: String,
    pub title: String,
    /// Non-negative amount in the base currency unit
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Calendar day the expense happened on (YYYY-MM-DD)
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the record was created (RFC 3339)
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn generate_id() -> String {
        format!("expense::{}", Uuid::new_v4())
    }
}

/// Budget window. Stored for display; spent totals do not filter by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsePeriodError(pub String);

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown budget period: {}", self.0)
    }
}

impl std::error::Error for ParsePeriodError {}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID in format: "budget::<uuid v4>"
    pub id: String,
    pub category: ExpenseCategory,
    pub limit: f64,
    pub period: BudgetPeriod,
    /// Recomputed from the expense ledger on every read
    #[serde(default)]
    pub spent: f64,
}

impl Budget {
    pub fn generate_id() -> String {
        format!("budget::{}", Uuid::new_v4())
    }
}

/// Derived view of a budget with its progress figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget: Budget,
    /// spent / limit * 100, zero when the limit is zero
    pub percentage: f64,
    /// May be negative once over budget
    pub remaining: f64,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
}

/// Catalog identifiers for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeId {
    FirstExpense,
    WeekStreak,
    MonthStreak,
    BudgetHero,
    SmartSaver,
    FinancialFortress,
}

impl BadgeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeId::FirstExpense => "first-expense",
            BadgeId::WeekStreak => "week-streak",
            BadgeId::MonthStreak => "month-streak",
            BadgeId::BudgetHero => "budget-hero",
            BadgeId::SmartSaver => "smart-saver",
            BadgeId::FinancialFortress => "financial-fortress",
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFund {
    pub amount: f64,
    pub monthly_expenses: f64,
    pub target_months: u32,
}

impl EmergencyFund {
    pub fn with_target_months(target_months: u32) -> Self {
        Self {
            amount: 0.0,
            monthly_expenses: 0.0,
            target_months,
        }
    }

    /// amount / monthly_expenses, or None while there are no monthly expenses
    pub fn coverage_ratio(&self) -> Option<f64> {
        if self.monthly_expenses > 0.0 {
            Some(self.amount / self.monthly_expenses)
        } else {
            None
        }
    }
}

impl Default for EmergencyFund {
    fn default() -> Self {
        Self::with_target_months(DEFAULT_TARGET_MONTHS)
    }
}

/// Per-user aggregate for streaks, badges and the emergency fund
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationData {
    pub badges: Vec<Badge>,
    pub streak: Streak,
    pub emergency_fund: EmergencyFund,
}

impl GamificationData {
    pub fn has_badge(&self, id: BadgeId) -> bool {
        self.badges.iter().any(|badge| badge.id == id)
    }
}

/// Display figures for the emergency fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundSummary {
    pub survival_months: f64,
    pub survival_days: u32,
    /// monthly_expenses / 30
    pub burn_rate: f64,
    /// Less than 30 days covered
    pub is_emergency: bool,
    /// survival_months as a percentage of target_months, capped at 100
    pub target_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub total: f64,
    pub percentage: f64,
}

/// One bucket of the six month trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// e.g. "Oct 2026"
    pub label: String,
    pub month: u32,
    pub year: i32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingStats {
    pub total_spent: f64,
    pub transaction_count: usize,
    pub average_transaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_expenses: f64,
    pub this_month_expenses: f64,
    pub total_budget: f64,
    pub budget_progress: f64,
    pub recent_expenses: Vec<Expense>,
}
