//! `plateup-orders` — immutable order records and their status lifecycle.

pub mod order;
pub mod status;

pub use order::{CustomerInfo, Order, OrderError};
pub use status::OrderStatus;
