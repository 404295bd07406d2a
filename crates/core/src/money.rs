//! Money value object.
//!
//! Amounts are stored in cents (smallest ZAR unit) to keep cart arithmetic
//! exact. Display formats as rand, e.g. `R185.00`.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative amount of money in cents.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convenience constructor for whole-rand amounts.
    pub const fn from_rands(rands: u64) -> Self {
        Self(rands * 100)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::overflow(format!("{self} + {other}")))
    }

    /// Multiply by a quantity (e.g. unit price × cart quantity).
    pub fn checked_mul(self, factor: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(u64::from(factor))
            .map(Money)
            .ok_or_else(|| DomainError::overflow(format!("{self} * {factor}")))
    }

    /// Sum an iterator of amounts, failing on overflow.
    pub fn sum<I: IntoIterator<Item = Money>>(amounts: I) -> DomainResult<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(m))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "R{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
