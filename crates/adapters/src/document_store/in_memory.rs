//! In-memory document store for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::{Collection, DocumentStore, StoreError};

/// HashMap-backed store with last-write-wins semantics.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<(Collection, String), JsonValue>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection (test helper).
    pub fn count(&self, collection: Collection) -> usize {
        self.inner
            .read()
            .map(|map| map.keys().filter(|(c, _)| *c == collection).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<JsonValue>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("store lock poisoned"))?;
        Ok(map.get(&(collection, id.to_string())).cloned())
    }

    async fn list(&self, collection: Collection) -> Result<Vec<(String, JsonValue)>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("store lock poisoned"))?;
        Ok(map
            .iter()
            .filter(|((c, _), _)| *c == collection)
            .map(|((_, id), v)| (id.clone(), v.clone()))
            .collect())
    }

    async fn put(
        &self,
        collection: Collection,
        id: &str,
        value: JsonValue,
    ) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("store lock poisoned"))?;
        map.insert((collection, id.to_string()), value);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("store lock poisoned"))?;
        map.remove(&(collection, id.to_string()));
        Ok(())
    }
}
