use anyhow::Result;
use log::info;
use shared::User;

use crate::storage::connection::StorageConnection;
use crate::storage::keys::RecordKind;
use crate::storage::traits::UserStorage;

/// The signed-in user, stored under the global (never namespaced) key
#[derive(Clone)]
pub struct UserRepository {
    connection: StorageConnection,
}

impl UserRepository {
    pub fn new(connection: StorageConnection) -> Self {
        Self { connection }
    }
}

impl UserStorage for UserRepository {
    fn get_user(&self) -> Result<Option<User>> {
        self.connection.load(RecordKind::User, None)
    }

    fn save_user(&self, user: &User) -> Result<()> {
        self.connection.save(RecordKind::User, None, user)?;
        info!("Stored user {}", user.id);
        Ok(())
    }

    fn clear_user(&self) -> Result<bool> {
        self.connection.remove(RecordKind::User, None)
    }
}
