//! Identity provider seam.

use crate::User;

/// The identity adapter the app consumes but does not implement.
///
/// Real deployments back this with a hosted identity service; tests use the
/// in-memory provider from the adapters crate.
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Whether the given user carries the admin capability.
    fn is_admin(&self, user: &User) -> bool;
}
