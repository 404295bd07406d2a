//! Cart aggregate: one customer's in-progress order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use plateup_auth::Session;
use plateup_core::{CartItemId, DomainError, DomainResult, Money};
use plateup_menu::MenuItem;

use crate::customization::Customization;
use crate::pricing;

/// Cart operation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Cart mutation attempted without a signed-in session.
    #[error("sign in required to modify the cart")]
    AuthRequired,

    /// The referenced cart line does not exist.
    #[error("cart item not found: {0}")]
    NotFound(CartItemId),

    /// The menu item is flagged unavailable in the catalog.
    #[error("menu item not available: {0}")]
    Unavailable(String),

    /// Quantity must be at least 1 when adding.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// One line of the cart.
///
/// The menu item's fields are copied at add time, so a later catalog edit
/// never reprices a cart behind the customer's back. `total_price` is a cache:
/// it must always equal the recomputation from unit price, quantity, and
/// extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub customization: Customization,
    pub total_price: Money,
}

impl CartItem {
    fn new(
        menu_item: MenuItem,
        quantity: u32,
        customization: Customization,
    ) -> DomainResult<Self> {
        let total_price =
            pricing::line_total(menu_item.price, quantity, &customization.extras)?;
        Ok(Self {
            id: CartItemId::new(),
            menu_item,
            quantity,
            customization,
            total_price,
        })
    }

    pub fn unit_price(&self) -> Money {
        self.menu_item.price
    }

    /// Recompute the line total from scratch. Equal to `total_price` by
    /// invariant.
    pub fn recomputed_total(&self) -> DomainResult<Money> {
        pricing::line_total(self.unit_price(), self.quantity, &self.customization.extras)
    }
}

/// Insertion-ordered cart, owned by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line for `menu_item`.
    ///
    /// Requires a signed-in session; fails without touching the cart when the
    /// session is missing, the item is unavailable, or pricing fails.
    pub fn add_item(
        &mut self,
        session: Option<&Session>,
        menu_item: &MenuItem,
        quantity: u32,
        customization: Customization,
    ) -> Result<CartItemId, CartError> {
        let session = session.ok_or(CartError::AuthRequired)?;
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if !menu_item.available {
            return Err(CartError::Unavailable(menu_item.name.clone()));
        }

        let item = CartItem::new(menu_item.clone(), quantity, customization)?;
        let id = item.id;
        tracing::debug!(
            user = %session.user_id(),
            cart_item = %id,
            item = %menu_item.name,
            quantity,
            total = %item.total_price,
            "added item to cart"
        );
        self.items.push(item);
        Ok(id)
    }

    /// Remove a line. Strict: an unknown id is an error, not a no-op.
    pub fn remove_item(&mut self, id: CartItemId) -> Result<(), CartError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::NotFound(id))?;
        self.items.remove(pos);
        Ok(())
    }

    /// Change a line's quantity. Zero means remove.
    ///
    /// The line is repriced from scratch: unit price × new quantity with
    /// surcharges reapplied once. (Not the proportional-of-previous-total
    /// variant, which quietly scales surcharges along with the base price.)
    pub fn update_quantity(&mut self, id: CartItemId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_item(id);
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CartError::NotFound(id))?;

        // Price first so an overflow leaves the line untouched.
        let total_price =
            pricing::line_total(item.menu_item.price, quantity, &item.customization.extras)?;
        item.quantity = quantity;
        item.total_price = total_price;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all cached line totals. Zero for an empty cart.
    pub fn total(&self) -> DomainResult<Money> {
        Money::sum(self.items.iter().map(|item| item.total_price))
    }
}
