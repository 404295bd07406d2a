//! `plateup-auth` — identity boundary: users, roles, sessions.
//!
//! This crate is intentionally decoupled from storage and from any identity
//! provider protocol; providers plug in behind [`IdentityProvider`].

pub mod provider;
pub mod roles;
pub mod session;
pub mod user;

pub use provider::IdentityProvider;
pub use roles::Role;
pub use session::Session;
pub use user::{CardDetails, Profile, User};
