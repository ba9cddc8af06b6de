//! Local session handling.
//!
//! There is no remote identity provider. Sign-in accepts a single demo
//! account; sign-up accepts any complete form. The signed-in user is kept
//! under the un-namespaced user key, and its id namespaces everything else.

use anyhow::Result;
use log::{info, warn};
use shared::User;

use crate::domain::commands::session::SignUpCommand;
use crate::storage::{StorageConnection, UserRepository, UserStorage};

pub const DEMO_EMAIL: &str = "demo@trackwise.com";
pub const DEMO_PASSWORD: &str = "demo123";
pub const DEMO_USER_ID: &str = "demo-user";
pub const DEMO_USER_NAME: &str = "Demo User";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email, password and name are all required")]
    MissingFields,
}

#[derive(Clone)]
pub struct SessionService {
    user_repository: UserRepository,
}

impl SessionService {
    pub fn new(connection: StorageConnection) -> Self {
        Self {
            user_repository: UserRepository::new(connection),
        }
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        self.user_repository.get_user()
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        info!("Sign-in attempt for {}", email);

        if email.trim() != DEMO_EMAIL || password != DEMO_PASSWORD {
            warn!("Rejected sign-in for {}", email);
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_EMAIL.to_string(),
            name: DEMO_USER_NAME.to_string(),
        };
        self.user_repository.save_user(&user)?;
        info!("Signed in as {}", user.id);
        Ok(user)
    }

    pub fn sign_up(&self, command: SignUpCommand) -> Result<User> {
        let email = command.email.trim();
        let name = command.name.trim();
        if email.is_empty() || command.password.is_empty() || name.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        let user = User {
            id: format!("user::{}", uuid::Uuid::new_v4()),
            email: email.to_string(),
            name: name.to_string(),
        };
        self.user_repository.save_user(&user)?;
        info!("Signed up new user {}", user.id);
        Ok(user)
    }

    /// Forget the signed-in user. Per-user ledgers stay in storage.
    pub fn sign_out(&self) -> Result<bool> {
        let removed = self.user_repository.clear_user()?;
        info!("Signed out (session present: {})", removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::memory_connection;

    fn sign_up_command(email: &str, password: &str, name: &str) -> SignUpCommand {
        SignUpCommand {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_demo_sign_in() {
        let service = SessionService::new(memory_connection());
        let user = service.sign_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(user.id, "demo-user");
        assert_eq!(user.name, "Demo User");
        assert_eq!(service.current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_wrong_credentials() {
        let service = SessionService::new(memory_connection());
        let err = service.sign_in(DEMO_EMAIL, "nope").unwrap_err();
        assert_eq!(err.downcast_ref::<AuthError>(), Some(&AuthError::InvalidCredentials));
        assert!(service.current_user().unwrap().is_none());
    }

    #[test]
    fn test_sign_up_requires_every_field() {
        let service = SessionService::new(memory_connection());
        let err = service.sign_up(sign_up_command("a@b.c", "", "Ann")).unwrap_err();
        assert_eq!(err.downcast_ref::<AuthError>(), Some(&AuthError::MissingFields));

        let user = service.sign_up(sign_up_command(" a@b.c ", "pw", "Ann")).unwrap();
        assert!(user.id.starts_with("user::"));
        assert_eq!(user.email, "a@b.c");
        assert_eq!(service.current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_sign_out() {
        let service = SessionService::new(memory_connection());
        service.sign_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert!(service.sign_out().unwrap());
        assert!(service.current_user().unwrap().is_none());
        assert!(!service.sign_out().unwrap());
    }
}
