//! Authenticated session handle.
//!
//! Operations take a `&Session` explicitly instead of reading ambient global
//! state. The admin capability is resolved once per refresh, not per call.

use chrono::{DateTime, Utc};

use plateup_core::{DomainError, DomainResult, UserId};

use crate::{IdentityProvider, User};

/// Snapshot of "who is signed in" plus their resolved capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    admin: bool,
    refreshed_at: DateTime<Utc>,
}

impl Session {
    /// Resolve the current session from the identity provider.
    ///
    /// Returns `None` when nobody is signed in. The admin check happens here,
    /// once, and is carried for the life of the session.
    pub fn refresh(provider: &dyn IdentityProvider, now: DateTime<Utc>) -> Option<Self> {
        let user = provider.current_user()?;
        let admin = provider.is_admin(&user);
        Some(Self {
            user,
            admin,
            refreshed_at: now,
        })
    }

    /// Build a session directly from a user (tests, trusted contexts).
    pub fn for_user(user: User, now: DateTime<Utc>) -> Self {
        let admin = user.is_admin();
        Self {
            user,
            admin,
            refreshed_at: now,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    /// Guard for admin-only operations.
    pub fn require_admin(&self) -> DomainResult<()> {
        if self.admin {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }
}
