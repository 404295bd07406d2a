use serde::{Deserialize, Serialize};

/// Role attached to a user record.
///
/// Everyone registers as a customer; admins are promoted out of band in the
/// backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Admin => write!(f, "admin"),
        }
    }
}
