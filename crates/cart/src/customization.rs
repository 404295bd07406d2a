//! Per-line customization selections.

use serde::{Deserialize, Serialize};

use plateup_core::{DomainError, DomainResult, Money, ValueObject};
use plateup_menu::{Extra, OptionCatalog, MAX_SIDES};

/// What the customer picked for one cart line.
///
/// Transient; lives inside a `CartItem` and is snapshotted into the order at
/// checkout. Extras carry their surcharge so pricing never needs the catalog
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customization {
    pub sides: Vec<String>,
    pub drink: Option<String>,
    pub extras: Vec<Extra>,
    /// Ingredients left off the item. No price effect.
    pub removed_ingredients: Vec<String>,
}

impl Customization {
    /// Build a customization from already-priced extras.
    pub fn new(
        sides: Vec<String>,
        drink: Option<String>,
        extras: Vec<Extra>,
        removed_ingredients: Vec<String>,
    ) -> DomainResult<Self> {
        if sides.len() > MAX_SIDES {
            return Err(DomainError::validation(format!(
                "at most {MAX_SIDES} sides per item, got {}",
                sides.len()
            )));
        }
        Ok(Self {
            sides,
            drink,
            extras,
            removed_ingredients,
        })
    }

    /// Resolve a selection by name against the option catalog.
    ///
    /// Unknown sides, drinks, or extras are rejected rather than priced at
    /// zero.
    pub fn select(
        catalog: &OptionCatalog,
        sides: &[&str],
        drink: Option<&str>,
        extras: &[&str],
        removed_ingredients: &[&str],
    ) -> DomainResult<Self> {
        for side in sides {
            if !catalog.offers_side(side) {
                return Err(DomainError::validation(format!("unknown side: {side}")));
            }
        }
        if let Some(drink) = drink {
            if !catalog.offers_drink(drink) {
                return Err(DomainError::validation(format!("unknown drink: {drink}")));
            }
        }

        let extras = extras
            .iter()
            .map(|name| {
                catalog
                    .extra(name)
                    .cloned()
                    .ok_or_else(|| DomainError::validation(format!("unknown extra: {name}")))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Self::new(
            sides.iter().map(|s| s.to_string()).collect(),
            drink.map(str::to_string),
            extras,
            removed_ingredients.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Sum of the extras' surcharges.
    pub fn surcharge_total(&self) -> DomainResult<Money> {
        Money::sum(self.extras.iter().map(|e| e.surcharge))
    }

    pub fn is_plain(&self) -> bool {
        self.sides.is_empty()
            && self.drink.is_none()
            && self.extras.is_empty()
            && self.removed_ingredients.is_empty()
    }
}

impl ValueObject for Customization {}
