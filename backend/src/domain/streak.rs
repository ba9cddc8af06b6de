//! Day-based activity streak.
//!
//! An activity is recorded against a calendar day. A second activity on the
//! same day changes nothing; an activity on the day after the last one
//! extends the streak; anything else (a gap, the first ever activity, or a
//! day before the last one) starts over at 1.

use chrono::{DateTime, NaiveDate, Utc};
use shared::Streak;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Activity already recorded for this day
    AlreadyRecorded,
    /// Consecutive day, streak grew by one
    Extended,
    /// First activity or broken streak, streak is now 1
    Restarted,
}

impl StreakUpdate {
    pub fn changed(&self) -> bool {
        !matches!(self, StreakUpdate::AlreadyRecorded)
    }
}

/// Calendar day of a timestamp, taken in UTC
pub fn activity_day(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// Apply one activity event on `day`
pub fn advance_streak(streak: &mut Streak, day: NaiveDate) -> StreakUpdate {
    if streak.last_activity_date == Some(day) {
        return StreakUpdate::AlreadyRecorded;
    }

    let update = match (streak.last_activity_date, day.pred_opt()) {
        (Some(last), Some(previous_day)) if last == previous_day => {
            streak.current_streak = streak.current_streak.saturating_add(1);
            StreakUpdate::Extended
        }
        _ => {
            streak.current_streak = 1;
            StreakUpdate::Restarted
        }
    };

    streak.longest_streak = streak.longest_streak.max(streak.current_streak);
    streak.last_activity_date = Some(day);
    update
}
