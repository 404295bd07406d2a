//! Typed repositories over the document store.
//!
//! Raw JSON is validated here, at the boundary: malformed documents surface
//! as errors instead of being coerced into the domain.

pub mod menu;
pub mod orders;
pub mod users;

use thiserror::Error;

use plateup_core::DomainError;

use crate::document_store::{Collection, StoreError};

pub use menu::MenuRepository;
pub use orders::{OrderRecord, OrderRepository};
pub use users::UserRepository;

/// Repository failure: storage trouble, or a document that fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("malformed document in {collection}: {message}")]
    Decode {
        collection: Collection,
        message: String,
    },
}

impl RepoError {
    pub(crate) fn decode(collection: Collection, err: serde_json::Error) -> Self {
        Self::Decode {
            collection,
            message: err.to_string(),
        }
    }
}
