//! `plateup-cart` — the in-progress order: pricing, customization, cart ops.

pub mod cart;
pub mod customization;
pub mod pricing;

pub use cart::{Cart, CartError, CartItem};
pub use customization::Customization;
pub use pricing::line_total;
