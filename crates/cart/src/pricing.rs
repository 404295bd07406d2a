//! Line-item pricing.

use plateup_core::{DomainResult, Money};
use plateup_menu::Extra;

/// Price of one cart line: `unit_price × quantity + Σ surcharge(extra)`.
///
/// Surcharges apply once per line, not per unit: two burgers with one
/// "Extra Chips" pay the R15 surcharge once. Assumes `quantity >= 1`; the
/// cart rejects zero quantities before pricing.
pub fn line_total(unit_price: Money, quantity: u32, extras: &[Extra]) -> DomainResult<Money> {
    let base = unit_price.checked_mul(quantity)?;
    let surcharges = Money::sum(extras.iter().map(|e| e.surcharge))?;
    base.checked_add(surcharges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_scales_with_quantity() {
        let total = line_total(Money::from_rands(85), 2, &[]).unwrap();
        assert_eq!(total, Money::from_rands(170));
    }

    #[test]
    fn surcharges_apply_once_regardless_of_quantity() {
        let extras = [Extra::new("Extra Chips", Money::from_rands(15))];

        let qty_two = line_total(Money::from_rands(85), 2, &extras).unwrap();
        assert_eq!(qty_two, Money::from_rands(185));

        let qty_five = line_total(Money::from_rands(85), 5, &extras).unwrap();
        assert_eq!(qty_five, Money::from_rands(440));
    }

    #[test]
    fn multiple_extras_accumulate() {
        let extras = [
            Extra::new("Sauce", Money::from_rands(5)),
            Extra::new("Cheese", Money::from_rands(8)),
        ];
        let total = line_total(Money::from_rands(30), 1, &extras).unwrap();
        assert_eq!(total, Money::from_rands(43));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let err = line_total(Money::from_cents(u64::MAX), 2, &[]).unwrap_err();
        assert!(matches!(err, plateup_core::DomainError::AmountOverflow(_)));
    }
}
