//! User repository.

use plateup_auth::User;
use plateup_core::{DomainError, UserId};

use crate::document_store::{Collection, DocumentStore};

use super::RepoError;

pub struct UserRepository<S> {
    store: S,
}

impl<S: DocumentStore> UserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a newly registered user; emails must be unique.
    pub async fn create(&self, user: &User) -> Result<(), RepoError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(RepoError::Domain(DomainError::validation(format!(
                "email already registered: {}",
                user.email
            ))));
        }
        self.put(user).await
    }

    /// Overwrite an existing user (profile update, card save, role change).
    pub async fn update(&self, user: &User) -> Result<(), RepoError> {
        self.put(user).await
    }

    pub async fn get(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let Some(doc) = self.store.get(Collection::Users, &id.to_string()).await? else {
            return Ok(None);
        };
        let user =
            serde_json::from_value(doc).map_err(|e| RepoError::decode(Collection::Users, e))?;
        Ok(Some(user))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let needle = email.trim().to_lowercase();
        for (_, doc) in self.store.list(Collection::Users).await? {
            let user: User =
                serde_json::from_value(doc).map_err(|e| RepoError::decode(Collection::Users, e))?;
            if user.email.to_lowercase() == needle {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    async fn put(&self, user: &User) -> Result<(), RepoError> {
        let doc =
            serde_json::to_value(user).map_err(|e| RepoError::decode(Collection::Users, e))?;
        self.store
            .put(Collection::Users, &user.id.to_string(), doc)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_store::InMemoryDocumentStore;
    use chrono::Utc;
    use plateup_auth::Profile;
    use std::sync::Arc;

    fn user(email: &str) -> User {
        User::register(email, Profile::default(), Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_and_find_by_email() {
        let repo = UserRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let u = user("lerato@example.com");
        repo.create(&u).await.unwrap();

        assert_eq!(repo.get(u.id).await.unwrap().unwrap(), u);
        assert_eq!(
            repo.find_by_email("LERATO@example.com").await.unwrap().unwrap().id,
            u.id
        );
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = UserRepository::new(Arc::new(InMemoryDocumentStore::new()));
        repo.create(&user("lerato@example.com")).await.unwrap();

        let err = repo.create(&user("Lerato@Example.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn update_overwrites_profile() {
        let repo = UserRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let mut u = user("lerato@example.com");
        repo.create(&u).await.unwrap();

        u.update_profile(Profile {
            name: "Lerato".to_string(),
            surname: "Mokoena".to_string(),
            phone: "0825551234".to_string(),
            address: "45 Long St".to_string(),
        });
        repo.update(&u).await.unwrap();

        let fetched = repo.get(u.id).await.unwrap().unwrap();
        assert_eq!(fetched.profile.name, "Lerato");
    }
}
