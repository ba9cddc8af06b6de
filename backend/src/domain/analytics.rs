//! Pure spending aggregations computed on demand from the ledgers.

use chrono::{Datelike, Duration, Months, NaiveDate};
use shared::{Budget, CategoryShare, CategoryTotal, DashboardSummary, Expense, MonthlyTrendPoint, SpendingStats};

/// Number of buckets in the trailing monthly trend
pub const TREND_MONTHS: u32 = 6;

/// Expenses shown in the dashboard's recent list
pub const RECENT_EXPENSES: usize = 5;

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum per category, rounded to cents, in order of first appearance
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
            }),
        }
    }

    for entry in &mut totals {
        entry.total = round_to_cents(entry.total);
    }
    totals
}

/// Category totals with their share of overall spending
pub fn category_shares(expenses: &[Expense]) -> Vec<CategoryShare> {
    let total_spent = total_spent(expenses);
    category_totals(expenses)
        .into_iter()
        .map(|entry| CategoryShare {
            category: entry.category,
            total: entry.total,
            percentage: if total_spent > 0.0 { entry.total / total_spent * 100.0 } else { 0.0 },
        })
        .collect()
}

pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

pub fn spending_stats(expenses: &[Expense]) -> SpendingStats {
    let total_spent = total_spent(expenses);
    let transaction_count = expenses.len();
    let average_transaction = if transaction_count > 0 {
        total_spent / transaction_count as f64
    } else {
        0.0
    };

    SpendingStats {
        total_spent,
        transaction_count,
        average_transaction,
    }
}

/// First day of the month `months_back` months before `today`'s month
fn month_start_before(today: NaiveDate, months_back: u32) -> Option<NaiveDate> {
    let first_of_month = today - Duration::days(i64::from(today.day0()));
    first_of_month.checked_sub_months(Months::new(months_back))
}

/// Short month label such as "Oct 2026"
pub fn month_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}

fn in_month(expense: &Expense, year: i32, month: u32) -> bool {
    expense.date.year() == year && expense.date.month() == month
}

/// Six trailing calendar months ending with `today`'s month, oldest first.
/// Months without expenses are present with a zero amount.
pub fn monthly_trend(expenses: &[Expense], today: NaiveDate) -> Vec<MonthlyTrendPoint> {
    (0..TREND_MONTHS)
        .rev()
        .filter_map(|months_back| month_start_before(today, months_back))
        .map(|month_start| {
            let (year, month) = (month_start.year(), month_start.month());
            let amount = expenses
                .iter()
                .filter(|expense| in_month(expense, year, month))
                .map(|expense| expense.amount)
                .sum::<f64>();

            MonthlyTrendPoint {
                label: month_label(month_start),
                month,
                year,
                amount: round_to_cents(amount),
            }
        })
        .collect()
}

/// Total of expenses dated in the same calendar month as `today`
pub fn month_total(expenses: &[Expense], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|expense| in_month(expense, today.year(), today.month()))
        .map(|expense| expense.amount)
        .sum()
}

pub fn dashboard_summary(expenses: &[Expense], budgets: &[Budget], today: NaiveDate) -> DashboardSummary {
    let this_month_expenses = month_total(expenses, today);
    let total_budget: f64 = budgets.iter().map(|budget| budget.limit).sum();
    let budget_progress = if total_budget > 0.0 {
        this_month_expenses / total_budget * 100.0
    } else {
        0.0
    };

    DashboardSummary {
        total_expenses: total_spent(expenses),
        this_month_expenses,
        total_budget,
        budget_progress,
        recent_expenses: expenses.iter().take(RECENT_EXPENSES).cloned().collect(),
    }
}
