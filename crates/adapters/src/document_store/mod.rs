//! Document store abstraction.
//!
//! Last-write-wins key/value semantics per collection; no transactions across
//! collections. Records cross this boundary as JSON and are validated by the
//! typed repositories on the way back in.

pub mod in_memory;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;

pub use in_memory::InMemoryDocumentStore;

/// The collections the app persists into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    MenuItems,
    Orders,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::MenuItems => "menu_items",
            Collection::Orders => "orders",
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage adapter failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Key/value document store the app consumes but does not implement.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<JsonValue>, StoreError>;

    /// All `(id, document)` pairs in a collection, unordered.
    async fn list(&self, collection: Collection) -> Result<Vec<(String, JsonValue)>, StoreError>;

    /// Upsert; the last write wins.
    async fn put(
        &self,
        collection: Collection,
        id: &str,
        value: JsonValue,
    ) -> Result<(), StoreError>;

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<JsonValue>, StoreError> {
        (**self).get(collection, id).await
    }

    async fn list(&self, collection: Collection) -> Result<Vec<(String, JsonValue)>, StoreError> {
        (**self).list(collection).await
    }

    async fn put(
        &self,
        collection: Collection,
        id: &str,
        value: JsonValue,
    ) -> Result<(), StoreError> {
        (**self).put(collection, id, value).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        (**self).delete(collection, id).await
    }
}
