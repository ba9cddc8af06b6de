//! Streak and badge engine.
//!
//! Owns the per-user `GamificationData` aggregate. Every activity event and
//! every emergency-fund update re-evaluates badge eligibility; awards are
//! appended one at a time, each followed by its own save.
//!
//! ## Business Rules
//!
//! - The streak moves at most once per calendar day (UTC)
//! - `longest_streak` never drops below `current_streak`
//! - A badge id is earned at most once and never removed
//! - A same-day repeat activity writes nothing and awards nothing

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use shared::{Badge, EmergencyFund, EmergencyFundSummary, GamificationData};

use crate::domain::analytics;
use crate::domain::badges;
use crate::domain::commands::gamification::{RecordActivityResult, UpdateEmergencyFundResult};
use crate::domain::streak::{activity_day, advance_streak};
use crate::storage::{ExpenseRepository, ExpenseStorage, GamificationRepository, GamificationStorage, StorageConnection};

/// Days per month used for survival and burn-rate figures
pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Clone)]
pub struct GamificationService {
    gamification_repository: GamificationRepository,
    expense_repository: ExpenseRepository,
    default_target_months: u32,
}

impl GamificationService {
    pub fn new(connection: StorageConnection, default_target_months: u32) -> Self {
        Self {
            gamification_repository: GamificationRepository::new(connection.clone()),
            expense_repository: ExpenseRepository::new(connection),
            default_target_months,
        }
    }

    /// Load the aggregate, or fresh zeroed defaults if none was saved yet
    pub fn get_gamification_data(&self, user_id: Option<&str>) -> Result<GamificationData> {
        match self.gamification_repository.get_gamification_data(user_id)? {
            Some(data) => Ok(data),
            None => {
                debug!("No gamification data for {:?}, using defaults", user_id);
                Ok(GamificationData {
                    badges: Vec::new(),
                    streak: Default::default(),
                    emergency_fund: EmergencyFund::with_target_months(self.default_target_months),
                })
            }
        }
    }

    /// Record an activity event for today (UTC)
    pub fn record_activity(&self, user_id: Option<&str>) -> Result<RecordActivityResult> {
        self.record_activity_on(user_id, activity_day(Utc::now()))
    }

    /// Record an activity event on a specific calendar day
    pub fn record_activity_on(&self, user_id: Option<&str>, day: NaiveDate) -> Result<RecordActivityResult> {
        info!("Recording activity for {:?} on {}", user_id, day);

        let mut data = self.get_gamification_data(user_id)?;
        let streak_update = advance_streak(&mut data.streak, day);

        if !streak_update.changed() {
            debug!("Activity already recorded for {:?} on {}", user_id, day);
            return Ok(RecordActivityResult {
                data,
                streak_update,
                awarded_badges: Vec::new(),
            });
        }

        self.gamification_repository.save_gamification_data(user_id, &data)?;
        info!(
            "Streak for {:?}: current={}, longest={} ({:?})",
            user_id, data.streak.current_streak, data.streak.longest_streak, streak_update
        );

        let awarded_badges = self.check_and_award_badges(user_id, &mut data)?;

        Ok(RecordActivityResult {
            data,
            streak_update,
            awarded_badges,
        })
    }

    /// Replace the emergency fund figures and re-check the savings badges.
    /// Values are stored as given.
    pub fn update_emergency_fund(
        &self,
        user_id: Option<&str>,
        amount: f64,
        monthly_expenses: f64,
    ) -> Result<UpdateEmergencyFundResult> {
        info!(
            "Updating emergency fund for {:?}: amount={:.2}, monthly_expenses={:.2}",
            user_id, amount, monthly_expenses
        );

        let mut data = self.get_gamification_data(user_id)?;
        data.emergency_fund.amount = amount;
        data.emergency_fund.monthly_expenses = monthly_expenses;
        self.gamification_repository.save_gamification_data(user_id, &data)?;

        let awarded_badges = self.check_and_award_badges(user_id, &mut data)?;

        Ok(UpdateEmergencyFundResult { data, awarded_badges })
    }

    /// Recompute monthly expenses from the ledger for `today`'s month.
    /// The fund is only updated when that month has spending.
    pub fn refresh_emergency_fund(&self, user_id: Option<&str>, today: NaiveDate) -> Result<UpdateEmergencyFundResult> {
        let expenses = self.expense_repository.list_expenses(user_id)?;
        let monthly_expenses = analytics::month_total(&expenses, today);
        let data = self.get_gamification_data(user_id)?;

        if monthly_expenses > 0.0 {
            return self.update_emergency_fund(user_id, data.emergency_fund.amount, monthly_expenses);
        }

        debug!("No spending in {} for {:?}, emergency fund unchanged", today.format("%Y-%m"), user_id);
        Ok(UpdateEmergencyFundResult {
            data,
            awarded_badges: Vec::new(),
        })
    }

    /// Append every newly eligible badge, saving after each award
    fn check_and_award_badges(&self, user_id: Option<&str>, data: &mut GamificationData) -> Result<Vec<Badge>> {
        let mut awarded = Vec::new();

        for definition in badges::newly_eligible(data) {
            let badge = definition.award(Utc::now());
            data.badges.push(badge.clone());
            self.gamification_repository.save_gamification_data(user_id, data)?;

            info!("Awarded badge '{}' to {:?}", definition.id, user_id);
            awarded.push(badge);
        }

        Ok(awarded)
    }
}

/// Survival figures shown next to the emergency fund
pub fn emergency_fund_summary(fund: &EmergencyFund) -> EmergencyFundSummary {
    let survival_months = fund.coverage_ratio().unwrap_or(0.0);
    let survival_days = (survival_months * DAYS_PER_MONTH).floor() as u32;
    let target_progress = if fund.target_months > 0 {
        (survival_months / fund.target_months as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    EmergencyFundSummary {
        survival_months,
        survival_days,
        burn_rate: fund.monthly_expenses / DAYS_PER_MONTH,
        is_emergency: survival_days < DAYS_PER_MONTH as u32,
        target_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::streak::StreakUpdate;
    use crate::test_utils::{sample_expense, ServiceTestHelper};
    use chrono::Duration;
    use shared::{BadgeId, ExpenseCategory};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_helper() -> ServiceTestHelper {
        ServiceTestHelper::new().expect("Failed to create test helper")
    }

    #[test]
    fn test_defaults_on_first_read() {
        let helper = ServiceTestHelper::with_target_months(9).expect("Failed to create test helper");
        let data = helper.gamification_service.get_gamification_data(Some("u1")).unwrap();
        assert!(data.badges.is_empty());
        assert_eq!(data.streak.current_streak, 0);
        assert_eq!(data.emergency_fund.target_months, 9);
    }

    #[test]
    fn test_same_day_activity_is_idempotent() {
        let helper = create_helper();
        let service = &helper.gamification_service;

        let first = service.record_activity_on(Some("u1"), day("2026-10-16")).unwrap();
        assert_eq!(first.streak_update, StreakUpdate::Restarted);

        let second = service.record_activity_on(Some("u1"), day("2026-10-16")).unwrap();
        assert_eq!(second.streak_update, StreakUpdate::AlreadyRecorded);
        assert_eq!(second.data.streak.current_streak, 1);

        let stored = service.get_gamification_data(Some("u1")).unwrap();
        assert_eq!(stored.streak.current_streak, 1);
    }

    #[test]
    fn test_continuity_and_reset_persist() {
        let helper = create_helper();
        let service = &helper.gamification_service;
        service.record_activity_on(Some("u1"), day("2026-10-16")).unwrap();
        service.record_activity_on(Some("u1"), day("2026-10-17")).unwrap();
        assert_eq!(service.get_gamification_data(Some("u1")).unwrap().streak.current_streak, 2);

        service.record_activity_on(Some("u1"), day("2026-10-19")).unwrap();
        let streak = service.get_gamification_data(Some("u1")).unwrap().streak;
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 2);
        assert_eq!(streak.last_activity_date, Some(day("2026-10-19")));
    }

    #[test]
    fn test_week_streak_badge_awarded_once() {
        let helper = create_helper();
        let service = &helper.gamification_service;
        let start = day("2026-10-01");

        let mut awarded_on = Vec::new();
        for offset in 0..10 {
            let result = service.record_activity_on(Some("u1"), start + Duration::days(offset)).unwrap();
            if !result.awarded_badges.is_empty() {
                awarded_on.push((offset, result.awarded_badges[0].id));
            }
        }
        assert_eq!(awarded_on, vec![(6, BadgeId::WeekStreak)]);

        let data = service.get_gamification_data(Some("u1")).unwrap();
        assert_eq!(data.badges.len(), 1);
        assert!(data.badges[0].earned_at.is_some());
    }

    #[test]
    fn test_badges_survive_streak_reset() {
        let helper = create_helper();
        let service = &helper.gamification_service;
        let start = day("2026-10-01");
        for offset in 0..7 {
            service.record_activity_on(Some("u1"), start + Duration::days(offset)).unwrap();
        }

        // Gap of several days resets the streak
        let result = service.record_activity_on(Some("u1"), day("2026-10-20")).unwrap();
        assert_eq!(result.data.streak.current_streak, 1);
        assert!(result.data.has_badge(BadgeId::WeekStreak));

        // Rebuilding the streak does not award it twice
        for offset in 1..8 {
            service.record_activity_on(Some("u1"), day("2026-10-20") + Duration::days(offset)).unwrap();
        }
        let data = service.get_gamification_data(Some("u1")).unwrap();
        let week_badges = data.badges.iter().filter(|b| b.id == BadgeId::WeekStreak).count();
        assert_eq!(week_badges, 1);
    }

    #[test]
    fn test_emergency_fund_smart_saver_scenario() {
        let helper = create_helper();
        let result = helper.gamification_service.update_emergency_fund(Some("u1"), 3000.0, 1000.0).unwrap();

        let ids: Vec<BadgeId> = result.awarded_badges.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BadgeId::SmartSaver]);
        assert!(!result.data.has_badge(BadgeId::FinancialFortress));

        let summary = emergency_fund_summary(&result.data.emergency_fund);
        assert_eq!(summary.survival_months, 3.0);
        assert_eq!(summary.survival_days, 90);
        assert!(!summary.is_emergency);
        assert_eq!(summary.target_progress, 50.0);
    }

    #[test]
    fn test_emergency_fund_awards_both_in_one_update() {
        let helper = create_helper();
        let service = &helper.gamification_service;
        let result = service.update_emergency_fund(Some("u1"), 6000.0, 1000.0).unwrap();
        let ids: Vec<BadgeId> = result.awarded_badges.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BadgeId::SmartSaver, BadgeId::FinancialFortress]);

        // Dropping the fund keeps what was earned
        let result = service.update_emergency_fund(Some("u1"), 0.0, 1000.0).unwrap();
        assert!(result.awarded_badges.is_empty());
        assert_eq!(result.data.badges.len(), 2);
    }

    #[test]
    fn test_emergency_fund_stores_values_as_given() {
        let helper = create_helper();
        let service = &helper.gamification_service;
        let result = service.update_emergency_fund(Some("u1"), -100.0, 1000.0).unwrap();
        assert!(result.awarded_badges.is_empty());
        assert_eq!(result.data.emergency_fund.amount, -100.0);

        let stored = service.get_gamification_data(Some("u1")).unwrap();
        assert_eq!(stored.emergency_fund.amount, -100.0);
        assert_eq!(stored.emergency_fund.monthly_expenses, 1000.0);
    }

    #[test]
    fn test_zero_monthly_expenses_awards_nothing() {
        let helper = create_helper();
        let result = helper.gamification_service.update_emergency_fund(Some("u1"), 10_000.0, 0.0).unwrap();
        assert!(result.awarded_badges.is_empty());

        let summary = emergency_fund_summary(&result.data.emergency_fund);
        assert_eq!(summary.survival_months, 0.0);
        assert_eq!(summary.survival_days, 0);
        assert!(summary.is_emergency);
        assert_eq!(summary.burn_rate, 0.0);
    }

    #[test]
    fn test_refresh_uses_current_month_spending() {
        let helper = create_helper();
        let service = &helper.gamification_service;

        service.update_emergency_fund(Some("u1"), 1500.0, 0.0).unwrap();
        helper
            .expense_repo
            .save_expenses(
                Some("u1"),
                &[
                    sample_expense("Rent", 400.0, ExpenseCategory::Bills, "2026-10-02"),
                    sample_expense("Food", 100.0, ExpenseCategory::Food, "2026-10-05"),
                    sample_expense("Old", 900.0, ExpenseCategory::Bills, "2026-09-02"),
                ],
            )
            .unwrap();

        let result = service.refresh_emergency_fund(Some("u1"), day("2026-10-16")).unwrap();
        assert_eq!(result.data.emergency_fund.monthly_expenses, 500.0);
        assert_eq!(result.data.emergency_fund.amount, 1500.0);
        assert!(result.data.has_badge(BadgeId::SmartSaver));
    }

    #[test]
    fn test_refresh_without_spending_leaves_fund() {
        let helper = create_helper();
        let service = &helper.gamification_service;
        service.update_emergency_fund(Some("u1"), 1500.0, 700.0).unwrap();

        let result = service.refresh_emergency_fund(Some("u1"), day("2026-10-16")).unwrap();
        assert_eq!(result.data.emergency_fund.monthly_expenses, 700.0);
    }

    #[test]
    fn test_burn_rate() {
        let fund = EmergencyFund {
            amount: 500.0,
            monthly_expenses: 900.0,
            target_months: 6,
        };
        let summary = emergency_fund_summary(&fund);
        assert_eq!(summary.burn_rate, 30.0);
        assert_eq!(summary.survival_days, 16);
        assert!(summary.is_emergency);
    }
}
