use anyhow::Result;
use shared::GamificationData;

use crate::storage::connection::StorageConnection;
use crate::storage::keys::RecordKind;
use crate::storage::traits::GamificationStorage;

/// Per-user gamification aggregate (badges, streak, emergency fund)
#[derive(Clone)]
pub struct GamificationRepository {
    connection: StorageConnection,
}

impl GamificationRepository {
    pub fn new(connection: StorageConnection) -> Self {
        Self { connection }
    }
}

impl GamificationStorage for GamificationRepository {
    fn get_gamification_data(&self, user_id: Option<&str>) -> Result<Option<GamificationData>> {
        self.connection.load(RecordKind::Gamification, user_id)
    }

    fn save_gamification_data(&self, user_id: Option<&str>, data: &GamificationData) -> Result<()> {
        self.connection.save(RecordKind::Gamification, user_id, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::KeyValueStore;
    use crate::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_aggregate_is_none() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let repo = GamificationRepository::new(env.connection.clone());
        assert!(repo.get_gamification_data(Some("u1")).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let repo = GamificationRepository::new(env.connection.clone());

        let mut data = GamificationData::default();
        data.streak.current_streak = 4;
        data.streak.longest_streak = 9;
        data.streak.last_activity_date = NaiveDate::from_ymd_opt(2026, 10, 16);
        data.emergency_fund.amount = 1200.0;

        repo.save_gamification_data(Some("u1"), &data).unwrap();
        assert_eq!(repo.get_gamification_data(Some("u1")).unwrap(), Some(data));
    }

    #[test]
    fn test_stored_json_uses_camel_case() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let repo = GamificationRepository::new(env.connection.clone());
        repo.save_gamification_data(Some("u1"), &GamificationData::default()).unwrap();

        let raw = env.store.get("trackwise_gamification_u1").unwrap().unwrap();
        assert!(raw.contains("\"currentStreak\":0"));
        assert!(raw.contains("\"emergencyFund\""));
        assert!(raw.contains("\"targetMonths\":6"));
    }
}
