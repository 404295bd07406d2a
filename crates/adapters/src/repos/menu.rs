//! Menu catalog repository.

use plateup_core::MenuItemId;
use plateup_menu::{MenuItem, MenuItemRecord};

use crate::document_store::{Collection, DocumentStore};

use super::RepoError;

pub struct MenuRepository<S> {
    store: S,
}

impl<S: DocumentStore> MenuRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write items into the store (bootstrap / admin menu management).
    pub async fn seed(&self, items: &[MenuItem]) -> Result<(), RepoError> {
        for item in items {
            self.save(item).await?;
        }
        Ok(())
    }

    pub async fn save(&self, item: &MenuItem) -> Result<(), RepoError> {
        let record = MenuItemRecord::from(item);
        let doc = serde_json::to_value(&record)
            .map_err(|e| RepoError::decode(Collection::MenuItems, e))?;
        self.store
            .put(Collection::MenuItems, &item.id.to_string(), doc)
            .await?;
        Ok(())
    }

    pub async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepoError> {
        let Some(doc) = self
            .store
            .get(Collection::MenuItems, &id.to_string())
            .await?
        else {
            return Ok(None);
        };
        let record: MenuItemRecord =
            serde_json::from_value(doc).map_err(|e| RepoError::decode(Collection::MenuItems, e))?;
        let item = MenuItem::try_from(record)?;
        Ok(Some(item))
    }

    /// Full catalog, name-ordered for stable display.
    pub async fn list(&self) -> Result<Vec<MenuItem>, RepoError> {
        let docs = self.store.list(Collection::MenuItems).await?;
        let mut items = Vec::with_capacity(docs.len());
        for (_, doc) in docs {
            let record: MenuItemRecord = serde_json::from_value(doc)
                .map_err(|e| RepoError::decode(Collection::MenuItems, e))?;
            items.push(MenuItem::try_from(record)?);
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Catalog filtered to what can actually be ordered.
    pub async fn list_available(&self) -> Result<Vec<MenuItem>, RepoError> {
        let mut items = self.list().await?;
        items.retain(|item| item.available);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_store::InMemoryDocumentStore;
    use plateup_menu::seed::standard_menu;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn seeded_menu_lists_back_validated() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let repo = MenuRepository::new(store);
        repo.seed(&standard_menu()).await.unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 18);
        // Name-ordered.
        let mut names: Vec<_> = items.iter().map(|i| i.name.clone()).collect();
        let sorted = names.clone();
        names.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn get_round_trips_single_item() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let repo = MenuRepository::new(store);
        let menu = standard_menu();
        repo.seed(&menu).await.unwrap();

        let fetched = repo.get(menu[0].id).await.unwrap().unwrap();
        assert_eq!(fetched, menu[0]);
        assert_eq!(repo.get(MenuItemId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_document_is_rejected_not_coerced() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .put(
                Collection::MenuItems,
                "bad",
                json!({"name": "Ghost", "price_cents": "lots"}),
            )
            .await
            .unwrap();

        let err = MenuRepository::new(Arc::clone(&store)).list().await.unwrap_err();
        assert!(matches!(err, RepoError::Decode { .. }));
    }

    #[tokio::test]
    async fn unknown_category_fails_validation_at_the_boundary() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .put(
                Collection::MenuItems,
                "bad",
                json!({
                    "id": uuid::Uuid::now_v7(),
                    "name": "Ghost",
                    "price_cents": 1000,
                    "category": "cryptids",
                }),
            )
            .await
            .unwrap();

        let err = MenuRepository::new(Arc::clone(&store)).list().await.unwrap_err();
        assert!(matches!(err, RepoError::Domain(_)));
    }

    #[tokio::test]
    async fn list_available_filters_out_unavailable() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let repo = MenuRepository::new(store);
        let mut menu = standard_menu();
        menu[0].available = false;
        repo.seed(&menu).await.unwrap();

        let available = repo.list_available().await.unwrap();
        assert_eq!(available.len(), 17);
        assert!(available.iter().all(|i| i.available));
    }
}
