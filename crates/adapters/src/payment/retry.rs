//! Single-retry decorator for payment authorization.

use std::time::Duration;

use async_trait::async_trait;

use plateup_auth::CardDetails;
use plateup_core::Money;

use super::{Authorization, PaymentError, PaymentGateway};

/// Retries exactly once, after a backoff, on transport failure.
///
/// Declines are final and never retried; only an `Err` from the inner
/// gateway triggers the second attempt.
pub struct RetryingGateway<G> {
    inner: G,
    backoff: Duration,
}

impl<G> RetryingGateway<G> {
    pub fn new(inner: G, backoff: Duration) -> Self {
        Self { inner, backoff }
    }
}

#[async_trait]
impl<G: PaymentGateway> PaymentGateway for RetryingGateway<G> {
    async fn authorize(
        &self,
        amount: Money,
        instrument: &CardDetails,
    ) -> Result<Authorization, PaymentError> {
        match self.inner.authorize(amount, instrument).await {
            Ok(auth) => Ok(auth),
            Err(err) => {
                tracing::warn!(%amount, error = %err, "authorization failed, retrying once");
                tokio::time::sleep(self.backoff).await;
                self.inner.authorize(amount, instrument).await
            }
        }
    }
}
