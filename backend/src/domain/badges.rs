//! Badge catalog and award predicates.
//!
//! Only the streak and emergency-fund badges have predicates. `first-expense`
//! and `budget-hero` are listed for display but never awarded here.

use chrono::{DateTime, Utc};
use shared::{Badge, BadgeId, GamificationData};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl BadgeDefinition {
    pub fn award(&self, earned_at: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            earned_at: Some(earned_at),
        }
    }
}

pub const WEEK_STREAK_DAYS: u32 = 7;
pub const MONTH_STREAK_DAYS: u32 = 30;
pub const SMART_SAVER_MONTHS: f64 = 3.0;
pub const FINANCIAL_FORTRESS_MONTHS: f64 = 6.0;

pub static BADGE_CATALOG: [BadgeDefinition; 6] = [
    BadgeDefinition {
        id: BadgeId::FirstExpense,
        name: "First Step",
        description: "Added your first expense",
        icon: "🎯",
    },
    BadgeDefinition {
        id: BadgeId::WeekStreak,
        name: "Week Warrior",
        description: "7 day tracking streak",
        icon: "🔥",
    },
    BadgeDefinition {
        id: BadgeId::MonthStreak,
        name: "Monthly Master",
        description: "30 day tracking streak",
        icon: "💪",
    },
    BadgeDefinition {
        id: BadgeId::BudgetHero,
        name: "Budget Hero",
        description: "Stayed under budget for a month",
        icon: "🦸",
    },
    BadgeDefinition {
        id: BadgeId::SmartSaver,
        name: "Smart Saver",
        description: "Built a 3-month emergency fund",
        icon: "💰",
    },
    BadgeDefinition {
        id: BadgeId::FinancialFortress,
        name: "Financial Fortress",
        description: "Built a 6-month emergency fund",
        icon: "🏰",
    },
];

pub fn definition(id: BadgeId) -> &'static BadgeDefinition {
    BADGE_CATALOG
        .iter()
        .find(|definition| definition.id == id)
        .unwrap_or_else(|| unreachable!("every BadgeId has a catalog entry"))
}

/// Whether the aggregate currently satisfies a badge's predicate
pub fn is_eligible(id: BadgeId, data: &GamificationData) -> bool {
    match id {
        BadgeId::WeekStreak => data.streak.current_streak >= WEEK_STREAK_DAYS,
        BadgeId::MonthStreak => data.streak.current_streak >= MONTH_STREAK_DAYS,
        BadgeId::SmartSaver => coverage_at_least(data, SMART_SAVER_MONTHS),
        BadgeId::FinancialFortress => coverage_at_least(data, FINANCIAL_FORTRESS_MONTHS),
        BadgeId::FirstExpense | BadgeId::BudgetHero => false,
    }
}

fn coverage_at_least(data: &GamificationData, months: f64) -> bool {
    data.emergency_fund
        .coverage_ratio()
        .map(|ratio| ratio >= months)
        .unwrap_or(false)
}

/// Catalog entries not yet earned whose predicate holds, in catalog order
pub fn newly_eligible(data: &GamificationData) -> Vec<&'static BadgeDefinition> {
    BADGE_CATALOG
        .iter()
        .filter(|definition| !data.has_badge(definition.id))
        .filter(|definition| is_eligible(definition.id, data))
        .collect()
}
