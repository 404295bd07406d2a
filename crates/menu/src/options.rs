//! Customization option catalog.
//!
//! Sides, drinks, and removable ingredients are free; extras carry a fixed
//! surcharge applied once per cart line.

use serde::{Deserialize, Serialize};

use plateup_core::{Money, ValueObject};

/// A cart line may carry at most this many sides.
pub const MAX_SIDES: usize = 2;

/// A priced extra (e.g. "Extra Chips" at R15.00).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    pub surcharge: Money,
}

impl Extra {
    pub fn new(name: impl Into<String>, surcharge: Money) -> Self {
        Self {
            name: name.into(),
            surcharge,
        }
    }
}

impl ValueObject for Extra {}

/// The options offered on the item detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCatalog {
    pub sides: Vec<String>,
    pub drinks: Vec<String>,
    pub extras: Vec<Extra>,
    pub removable_ingredients: Vec<String>,
}

impl OptionCatalog {
    /// The standard option set every item is customized against.
    pub fn standard() -> Self {
        Self {
            sides: vec![
                "Chips".to_string(),
                "Pap".to_string(),
                "Salad".to_string(),
                "Rice".to_string(),
            ],
            drinks: vec![
                "Coke".to_string(),
                "Sprite".to_string(),
                "Water".to_string(),
                "Juice".to_string(),
            ],
            extras: vec![
                Extra::new("Extra Chips", Money::from_rands(15)),
                Extra::new("Sauce", Money::from_rands(5)),
                Extra::new("Extra Salad", Money::from_rands(10)),
                Extra::new("Cheese", Money::from_rands(8)),
            ],
            removable_ingredients: vec![
                "Lettuce".to_string(),
                "Tomato".to_string(),
                "Onion".to_string(),
                "Pickles".to_string(),
                "Cheese".to_string(),
            ],
        }
    }

    pub fn extra(&self, name: &str) -> Option<&Extra> {
        self.extras.iter().find(|e| e.name == name)
    }

    pub fn offers_side(&self, name: &str) -> bool {
        self.sides.iter().any(|s| s == name)
    }

    pub fn offers_drink(&self, name: &str) -> bool {
        self.drinks.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_prices_extras() {
        let catalog = OptionCatalog::standard();
        assert_eq!(
            catalog.extra("Extra Chips").unwrap().surcharge,
            Money::from_rands(15)
        );
        assert_eq!(catalog.extra("Cheese").unwrap().surcharge, Money::from_rands(8));
        assert!(catalog.extra("Gold Leaf").is_none());
    }

    #[test]
    fn standard_catalog_offers_observed_sides_and_drinks() {
        let catalog = OptionCatalog::standard();
        assert!(catalog.offers_side("Pap"));
        assert!(catalog.offers_drink("Coke"));
        assert!(!catalog.offers_side("Coke"));
    }
}
