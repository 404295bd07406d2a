//! Registration and profile management.

use chrono::{DateTime, Utc};

use plateup_adapters::{DocumentStore, RepoError, UserRepository};
use plateup_auth::{CardDetails, Profile, Session, User};

pub struct AccountService<S> {
    users: UserRepository<S>,
}

impl<S: DocumentStore> AccountService<S> {
    pub fn new(users: UserRepository<S>) -> Self {
        Self { users }
    }

    /// Register a new customer. Email shape is validated by the domain;
    /// uniqueness by the repository.
    pub async fn register(
        &self,
        email: &str,
        profile: Profile,
        now: DateTime<Utc>,
    ) -> Result<User, RepoError> {
        let user = User::register(email, profile, now)?;
        self.users.create(&user).await?;
        tracing::info!(user = %user.id, "user registered");
        Ok(user)
    }

    pub async fn update_profile(
        &self,
        session: &Session,
        profile: Profile,
    ) -> Result<User, RepoError> {
        let mut user = session.user().clone();
        user.update_profile(profile);
        self.users.update(&user).await?;
        Ok(user)
    }

    pub async fn save_card(
        &self,
        session: &Session,
        card: CardDetails,
    ) -> Result<User, RepoError> {
        let mut user = session.user().clone();
        user.save_card(card);
        self.users.update(&user).await?;
        Ok(user)
    }
}
