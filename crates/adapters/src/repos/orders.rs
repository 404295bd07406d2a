//! Order repository.

use serde::{Deserialize, Serialize};

use plateup_core::{OrderId, UserId};
use plateup_orders::Order;

use crate::document_store::{Collection, DocumentStore};

use super::RepoError;

/// The order document as persisted: the order itself plus the payment
/// authorization reference captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order: Order,
    pub transaction_id: Option<String>,
}

pub struct OrderRepository<S> {
    store: S,
}

impl<S: DocumentStore> OrderRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn save(&self, record: &OrderRecord) -> Result<(), RepoError> {
        let doc =
            serde_json::to_value(record).map_err(|e| RepoError::decode(Collection::Orders, e))?;
        self.store
            .put(Collection::Orders, &record.order.id.to_string(), doc)
            .await?;
        Ok(())
    }

    pub async fn get(&self, id: OrderId) -> Result<Option<OrderRecord>, RepoError> {
        let Some(doc) = self.store.get(Collection::Orders, &id.to_string()).await? else {
            return Ok(None);
        };
        let record =
            serde_json::from_value(doc).map_err(|e| RepoError::decode(Collection::Orders, e))?;
        Ok(Some(record))
    }

    /// Every order, newest first (admin panel view).
    pub async fn list_all(&self) -> Result<Vec<OrderRecord>, RepoError> {
        let docs = self.store.list(Collection::Orders).await?;
        let mut records = Vec::with_capacity(docs.len());
        for (_, doc) in docs {
            let record: OrderRecord = serde_json::from_value(doc)
                .map_err(|e| RepoError::decode(Collection::Orders, e))?;
            records.push(record);
        }
        records.sort_by(|a, b| b.order.created_at.cmp(&a.order.created_at));
        Ok(records)
    }

    /// One user's order history, newest first.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderRecord>, RepoError> {
        let mut records = self.list_all().await?;
        records.retain(|r| r.order.user_id == user_id);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_store::InMemoryDocumentStore;
    use chrono::{Duration, Utc};
    use plateup_auth::{Profile, Session, User};
    use plateup_cart::{Cart, Customization};
    use plateup_core::{MenuItemId, Money};
    use plateup_menu::{Category, MenuItem};
    use plateup_orders::CustomerInfo;
    use std::sync::Arc;

    fn order_for(user_id: UserId, minutes_ago: i64) -> OrderRecord {
        let user = User::register("o@e.com", Profile::default(), Utc::now()).unwrap();
        let session = Session::for_user(user, Utc::now());
        let item = MenuItem {
            id: MenuItemId::new(),
            name: "Burger".to_string(),
            description: String::new(),
            price: Money::from_rands(85),
            category: Category::Burgers,
            image_key: String::new(),
            available: true,
        };
        let mut cart = Cart::new();
        cart.add_item(Some(&session), &item, 1, Customization::default())
            .unwrap();

        let customer = CustomerInfo {
            name: "A".to_string(),
            surname: "B".to_string(),
            phone: "0820000000".to_string(),
            address: "Somewhere".to_string(),
        };
        let order = Order::build(
            &cart,
            user_id,
            customer,
            Utc::now() - Duration::minutes(minutes_ago),
        )
        .unwrap();
        OrderRecord {
            order,
            transaction_id: Some("mock_txn".to_string()),
        }
    }

    #[tokio::test]
    async fn save_and_get_round_trip() {
        let repo = OrderRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let record = order_for(UserId::new(), 0);
        repo.save(&record).await.unwrap();

        let fetched = repo.get(record.order.id).await.unwrap().unwrap();
        assert_eq!(fetched, record);
        assert_eq!(repo.get(OrderId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_all_is_newest_first() {
        let repo = OrderRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let older = order_for(UserId::new(), 60);
        let newer = order_for(UserId::new(), 1);
        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].order.id, newer.order.id);
        assert_eq!(all[1].order.id, older.order.id);
    }

    #[tokio::test]
    async fn list_for_user_filters_history() {
        let repo = OrderRepository::new(Arc::new(InMemoryDocumentStore::new()));
        let mine = UserId::new();
        let theirs = UserId::new();
        repo.save(&order_for(mine, 10)).await.unwrap();
        repo.save(&order_for(theirs, 5)).await.unwrap();
        repo.save(&order_for(mine, 1)).await.unwrap();

        let history = repo.list_for_user(mine).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.order.user_id == mine));
        assert!(history[0].order.created_at > history[1].order.created_at);
    }
}
