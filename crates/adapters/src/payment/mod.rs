//! Payment gateway seam.

pub mod mock;
pub mod retry;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use plateup_auth::CardDetails;
use plateup_core::Money;

pub use mock::MockGateway;
pub use retry::RetryingGateway;

/// Outcome of an authorization attempt.
///
/// A decline is a successful call with `approved == false`; transport trouble
/// is an `Err` and may be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    pub approved: bool,
    pub transaction_id: Option<String>,
}

impl Authorization {
    pub fn approved(transaction_id: impl Into<String>) -> Self {
        Self {
            approved: true,
            transaction_id: Some(transaction_id.into()),
        }
    }

    pub fn declined() -> Self {
        Self {
            approved: false,
            transaction_id: None,
        }
    }
}

/// Transport-level payment failure (provider unreachable, timeout).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment transport failure: {0}")]
    Transport(String),
}

/// The payment adapter the app consumes but does not implement.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(
        &self,
        amount: Money,
        instrument: &CardDetails,
    ) -> Result<Authorization, PaymentError>;
}

#[async_trait]
impl<G> PaymentGateway for Arc<G>
where
    G: PaymentGateway + ?Sized,
{
    async fn authorize(
        &self,
        amount: Money,
        instrument: &CardDetails,
    ) -> Result<Authorization, PaymentError> {
        (**self).authorize(amount, instrument).await
    }
}
