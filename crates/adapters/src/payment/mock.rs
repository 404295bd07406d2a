//! Mock payment gateway.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use plateup_auth::CardDetails;
use plateup_core::Money;

use super::{Authorization, PaymentError, PaymentGateway};

/// Card prefixes the mock treats as valid test cards.
const APPROVED_PREFIXES: [&str; 4] = ["4111", "4000", "5555", "3782"];

/// Approves known test-card prefixes, declines everything else.
///
/// `failing_times` injects transport failures on the first N calls to
/// exercise retry behavior.
#[derive(Debug, Default)]
pub struct MockGateway {
    transport_failures_left: AtomicUsize,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `n` calls with a transport error before recovering.
    pub fn failing_times(n: usize) -> Self {
        Self {
            transport_failures_left: AtomicUsize::new(n),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn authorize(
        &self,
        amount: Money,
        instrument: &CardDetails,
    ) -> Result<Authorization, PaymentError> {
        let failures = self.transport_failures_left.load(Ordering::SeqCst);
        if failures > 0 {
            self.transport_failures_left
                .store(failures - 1, Ordering::SeqCst);
            return Err(PaymentError::Transport(
                "provider unreachable (injected)".to_string(),
            ));
        }

        let approved = APPROVED_PREFIXES
            .iter()
            .any(|prefix| instrument.number.starts_with(prefix));

        if approved {
            let txn = format!("mock_{}", Uuid::now_v7().simple());
            tracing::debug!(%amount, transaction = %txn, "mock authorization approved");
            Ok(Authorization::approved(txn))
        } else {
            tracing::debug!(%amount, "mock authorization declined");
            Ok(Authorization::declined())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> CardDetails {
        CardDetails {
            number: number.to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[tokio::test]
    async fn known_test_prefixes_are_approved() {
        let gateway = MockGateway::new();
        for number in ["4111111111111111", "4000123412341234", "5555444433332222", "378282246310005"] {
            let auth = gateway
                .authorize(Money::from_rands(100), &card(number))
                .await
                .unwrap();
            assert!(auth.approved, "{number} should be approved");
            assert!(auth.transaction_id.is_some());
        }
    }

    #[tokio::test]
    async fn unknown_card_is_declined_not_errored() {
        let gateway = MockGateway::new();
        let auth = gateway
            .authorize(Money::from_rands(100), &card("6011000000000004"))
            .await
            .unwrap();
        assert!(!auth.approved);
        assert!(auth.transaction_id.is_none());
    }

    #[tokio::test]
    async fn injected_failures_burn_off() {
        let gateway = MockGateway::failing_times(1);
        let err = gateway
            .authorize(Money::from_rands(100), &card("4111111111111111"))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Transport(_)));

        let auth = gateway
            .authorize(Money::from_rands(100), &card("4111111111111111"))
            .await
            .unwrap();
        assert!(auth.approved);
    }
}
