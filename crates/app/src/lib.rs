//! `plateup-app` — the service layer the presentation sits on.
//!
//! Screens call these services with an explicit [`plateup_auth::Session`];
//! nothing here reads ambient global state.

pub mod accounts;
pub mod admin;
pub mod analytics;
pub mod checkout;

pub use accounts::AccountService;
pub use admin::{AdminError, AdminOrderService};
pub use analytics::{AnalyticsService, RevenueReport};
pub use checkout::{CheckoutError, CheckoutService};
