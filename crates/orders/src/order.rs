//! Order record and checkout-time construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use plateup_cart::{Cart, CartItem};
use plateup_core::{DomainError, Entity, Money, OrderId, UserId};

use crate::status::OrderStatus;

/// Order construction / mutation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Checkout attempted on an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A required contact/delivery field is blank.
    #[error("missing customer info: {0}")]
    MissingCustomerInfo(&'static str),

    /// Illegal status transition; state is left unchanged.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Contact and delivery details denormalized onto the order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub address: String,
}

impl CustomerInfo {
    /// All four fields are required for delivery.
    fn validate(&self) -> Result<(), OrderError> {
        let required: [(&'static str, &str); 4] = [
            ("name", &self.name),
            ("surname", &self.surname),
            ("phone", &self.phone),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(OrderError::MissingCustomerInfo(field));
            }
        }
        Ok(())
    }
}

/// A placed order.
///
/// Append-only once built: the item snapshot, total, customer fields, and
/// timestamps never change. `status` is the single mutable field and only
/// moves along the transitions in [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub customer: CustomerInfo,
    items: Vec<CartItem>,
    total: Money,
    status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build an order from the cart at checkout time.
    ///
    /// The item snapshot is a deep copy and the total is computed from that
    /// same snapshot, so there is one consistent view: later cart mutation
    /// cannot touch the order, and the stored total cannot drift from the
    /// stored items.
    pub fn build(
        cart: &Cart,
        user_id: UserId,
        customer: CustomerInfo,
        now: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        customer.validate()?;

        let items: Vec<CartItem> = cart.items().to_vec();
        let total = Money::sum(items.iter().map(|item| item.total_price))
            .map_err(OrderError::Domain)?;

        Ok(Self {
            id: OrderId::new(),
            user_id,
            customer,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: now,
        })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Apply a status transition. The only permitted mutation of a placed
    /// order; an illegal transition fails and leaves the status unchanged.
    pub fn transition(&mut self, to: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(to) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        tracing::info!(order = %self.id, from = %self.status, to = %to, "order status changed");
        self.status = to;
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
