//! `plateup-adapters` — storage, payment, and identity implementations behind
//! the domain's seams. In-memory variants back tests and dev.

pub mod document_store;
pub mod identity;
pub mod payment;
pub mod repos;

pub use document_store::{Collection, DocumentStore, InMemoryDocumentStore, StoreError};
pub use identity::InMemoryIdentityProvider;
pub use payment::{Authorization, MockGateway, PaymentError, PaymentGateway, RetryingGateway};
pub use repos::{MenuRepository, OrderRecord, OrderRepository, RepoError, UserRepository};
