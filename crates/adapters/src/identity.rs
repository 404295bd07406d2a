//! In-memory identity provider for tests/dev.

use std::sync::RwLock;

use plateup_auth::{IdentityProvider, Role, User};

/// Holds at most one signed-in user.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    current: RwLock<Option<User>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user: User) {
        if let Ok(mut current) = self.current.write() {
            *current = Some(user);
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    fn current_user(&self) -> Option<User> {
        self.current.read().ok()?.clone()
    }

    fn is_admin(&self, user: &User) -> bool {
        user.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use plateup_auth::{Profile, Session};

    #[test]
    fn sign_in_and_out_drive_session_refresh() {
        let provider = InMemoryIdentityProvider::new();
        assert!(Session::refresh(&provider, Utc::now()).is_none());

        let user = User::register("sipho@example.com", Profile::default(), Utc::now()).unwrap();
        provider.sign_in(user.clone());
        let session = Session::refresh(&provider, Utc::now()).unwrap();
        assert_eq!(session.user_id(), user.id);
        assert!(!session.is_admin());

        provider.sign_out();
        assert!(Session::refresh(&provider, Utc::now()).is_none());
    }

    #[test]
    fn admin_role_grants_capability() {
        let provider = InMemoryIdentityProvider::new();
        let mut user = User::register("boss@example.com", Profile::default(), Utc::now()).unwrap();
        user.role = Role::Admin;
        provider.sign_in(user);

        let session = Session::refresh(&provider, Utc::now()).unwrap();
        assert!(session.is_admin());
    }
}
