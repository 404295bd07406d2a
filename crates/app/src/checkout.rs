//! Checkout orchestration: payment, order construction, persistence.

use thiserror::Error;

use plateup_adapters::{
    OrderRecord, OrderRepository, PaymentGateway, RepoError,
};
use plateup_auth::{CardDetails, Session};
use plateup_cart::Cart;
use plateup_core::OrderId;
use plateup_orders::{CustomerInfo, Order, OrderError};

/// Checkout failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout precondition failed (`EmptyCart`, `MissingCustomerInfo`).
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Authorization declined, or the provider stayed unreachable after the
    /// retry.
    #[error("payment failed: {0}")]
    PaymentFailed(String),

    /// The order could not be written; the cart is left intact for retry.
    #[error(transparent)]
    Persistence(#[from] RepoError),
}

/// Places orders. One instance per storage/gateway pair.
pub struct CheckoutService<S, G> {
    orders: OrderRepository<S>,
    gateway: G,
}

impl<S, G> CheckoutService<S, G>
where
    S: plateup_adapters::DocumentStore,
    G: PaymentGateway,
{
    pub fn new(orders: OrderRepository<S>, gateway: G) -> Self {
        Self { orders, gateway }
    }

    /// The whole checkout flow.
    ///
    /// Preconditions are checked before the card is touched. The item
    /// snapshot and total come from one consistent view of the cart (the
    /// `&mut` borrow rules out interleaved mutation). The cart is cleared
    /// only after the order write succeeds; any earlier failure leaves it
    /// unmodified so the customer can retry.
    pub async fn place_order(
        &self,
        session: &Session,
        cart: &mut Cart,
        customer: CustomerInfo,
        card: &CardDetails,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<OrderId, CheckoutError> {
        let order = Order::build(cart, session.user_id(), customer, now)?;

        let authorization = self
            .gateway
            .authorize(order.total(), card)
            .await
            .map_err(|e| CheckoutError::PaymentFailed(e.to_string()))?;
        if !authorization.approved {
            return Err(CheckoutError::PaymentFailed("declined".to_string()));
        }

        let record = OrderRecord {
            order,
            transaction_id: authorization.transaction_id,
        };
        self.orders.save(&record).await?;

        tracing::info!(
            order = %record.order.id,
            user = %session.user_id(),
            total = %record.order.total(),
            "order placed"
        );
        cart.clear();
        Ok(record.order.id)
    }

    /// The signed-in customer's order history, newest first.
    pub async fn order_history(
        &self,
        session: &Session,
    ) -> Result<Vec<OrderRecord>, CheckoutError> {
        Ok(self.orders.list_for_user(session.user_id()).await?)
    }
}
