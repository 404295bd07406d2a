//! User profile entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plateup_core::{DomainError, Entity, UserId};

use crate::Role;

/// Saved card details a returning customer pays with.
///
/// Held verbatim the way the original store kept them; real vaulting is an
/// external concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

/// Contact/delivery details captured at registration and editable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub address: String,
}

/// A registered user.
///
/// # Invariants
/// - Email is unique across the store (enforced by the user repository).
/// - Users are never hard-deleted; profile fields may change, `id` and
///   `created_at` may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub profile: Profile,
    pub card: Option<CardDetails>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Register a new user. Everyone starts as a customer.
    pub fn register(
        email: impl Into<String>,
        profile: Profile,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let email = email.into();
        validate_email(&email)?;

        Ok(Self {
            id: UserId::new(),
            email,
            profile,
            card: None,
            role: Role::Customer,
            created_at: now,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn update_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    pub fn save_card(&mut self, card: CardDetails) {
        self.card = Some(card);
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(DomainError::validation("invalid email format"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_to_customer_role() {
        let user = User::register("thabo@example.com", Profile::default(), Utc::now()).unwrap();
        assert_eq!(user.role, Role::Customer);
        assert!(!user.is_admin());
        assert!(user.card.is_none());
    }

    #[test]
    fn register_rejects_malformed_email() {
        for email in ["", "   ", "no-at-sign"] {
            let err = User::register(email, Profile::default(), Utc::now()).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{email:?}");
        }
    }

    #[test]
    fn profile_update_keeps_identity() {
        let mut user = User::register("a@b.c", Profile::default(), Utc::now()).unwrap();
        let id = user.id;
        user.update_profile(Profile {
            name: "Thabo".to_string(),
            surname: "Nkosi".to_string(),
            phone: "0821234567".to_string(),
            address: "12 Vilakazi St".to_string(),
        });
        assert_eq!(user.id, id);
        assert_eq!(user.profile.name, "Thabo");
    }
}
