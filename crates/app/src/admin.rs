//! Admin-side order management.

use thiserror::Error;

use plateup_adapters::{DocumentStore, OrderRecord, OrderRepository, RepoError};
use plateup_auth::Session;
use plateup_core::{DomainError, OrderId};
use plateup_orders::{OrderError, OrderStatus};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Missing admin capability, or the order does not exist.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Illegal status transition.
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Status transitions and the admin order panel. Every operation checks the
/// session's admin capability first.
pub struct AdminOrderService<S> {
    orders: OrderRepository<S>,
}

impl<S: DocumentStore> AdminOrderService<S> {
    pub fn new(orders: OrderRepository<S>) -> Self {
        Self { orders }
    }

    /// All orders, newest first.
    pub async fn list_orders(&self, session: &Session) -> Result<Vec<OrderRecord>, AdminError> {
        session.require_admin()?;
        Ok(self.orders.list_all().await?)
    }

    /// Move an order along its status lifecycle.
    ///
    /// Load, transition, save: an invalid transition fails before anything is
    /// written, so the stored order is never half-updated.
    pub async fn transition_order(
        &self,
        session: &Session,
        order_id: OrderId,
        to: OrderStatus,
    ) -> Result<OrderRecord, AdminError> {
        session.require_admin()?;

        let mut record = self
            .orders
            .get(order_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        record.order.transition(to)?;
        self.orders.save(&record).await?;
        Ok(record)
    }

    pub async fn confirm(
        &self,
        session: &Session,
        order_id: OrderId,
    ) -> Result<OrderRecord, AdminError> {
        self.transition_order(session, order_id, OrderStatus::Confirmed)
            .await
    }

    pub async fn deliver(
        &self,
        session: &Session,
        order_id: OrderId,
    ) -> Result<OrderRecord, AdminError> {
        self.transition_order(session, order_id, OrderStatus::Delivered)
            .await
    }

    pub async fn cancel(
        &self,
        session: &Session,
        order_id: OrderId,
    ) -> Result<OrderRecord, AdminError> {
        self.transition_order(session, order_id, OrderStatus::Cancelled)
            .await
    }
}
