//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// Order status: `Pending → {Confirmed, Cancelled}`, `Confirmed → Delivered`.
/// `Delivered` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `self → to` is a legal transition.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        matches!(
            (self, to),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Delivered)
        )
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn legal_transitions() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Delivered));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for to in [Pending, Confirmed, Delivered, Cancelled] {
            assert!(!Delivered.can_transition_to(to), "delivered -> {to}");
            assert!(!Cancelled.can_transition_to(to), "cancelled -> {to}");
        }
        assert!(Delivered.is_terminal());
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn no_backwards_or_self_transitions() {
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Delivered));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Pending).unwrap(), "\"pending\"");
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"cancelled\"").unwrap(),
            Cancelled
        );
    }
}
