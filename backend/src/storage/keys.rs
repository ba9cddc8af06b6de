//! Logical record keys and per-user namespacing.
//!
//! ```text
//! trackwise_user                      (global)
//! trackwise_expenses_<user id>
//! trackwise_budgets_<user id>
//! trackwise_gamification_<user id>
//! ```
//!
//! Without a user id the bare `<prefix>_<record>` key is used.

pub const DEFAULT_KEY_PREFIX: &str = "trackwise";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Expenses,
    Budgets,
    Gamification,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::User => "user",
            RecordKind::Expenses => "expenses",
            RecordKind::Budgets => "budgets",
            RecordKind::Gamification => "gamification",
        }
    }

    /// The user record identifies the namespace, so it is never inside one
    pub fn is_namespaced(&self) -> bool {
        !matches!(self, RecordKind::User)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn key_for(&self, record: RecordKind, user_id: Option<&str>) -> String {
        let base = format!("{}_{}", self.prefix, record.as_str());
        match user_id {
            Some(id) if record.is_namespaced() && !id.is_empty() => format!("{}_{}", base, id),
            _ => base,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}
