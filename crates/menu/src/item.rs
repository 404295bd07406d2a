use serde::{Deserialize, Serialize};

use plateup_core::{DomainError, Entity, MenuItemId, Money};

/// Menu category taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starters,
    Mains,
    Burgers,
    Desserts,
    Beverages,
    Alcohols,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Burgers => "Burgers",
            Category::Desserts => "Desserts",
            Category::Beverages => "Beverages",
            Category::Alcohols => "Alcohols",
        }
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starters" => Ok(Category::Starters),
            "mains" => Ok(Category::Mains),
            "burgers" => Ok(Category::Burgers),
            "desserts" => Ok(Category::Desserts),
            "beverages" => Ok(Category::Beverages),
            "alcohols" => Ok(Category::Alcohols),
            other => Err(DomainError::validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entity: a menu item.
///
/// Immutable once loaded for a session; cart lines copy the fields they need
/// rather than holding a live link into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    /// Key into the presentation layer's image registry.
    pub image_key: String,
    pub available: bool,
}

impl Entity for MenuItem {
    type Id = MenuItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Raw menu document as it comes out of the document store.
///
/// Untrusted: category is a free string, price may be nonsense. Validation
/// happens in the `TryFrom` conversion at the repository boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: u64,
    pub category: String,
    #[serde(default)]
    pub image_key: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = DomainError;

    fn try_from(record: MenuItemRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(DomainError::validation("menu item name must not be empty"));
        }

        let category: Category = record.category.parse()?;

        Ok(MenuItem {
            id: record.id,
            name: record.name,
            description: record.description,
            price: Money::from_cents(record.price_cents),
            category,
            image_key: record.image_key,
            available: record.available,
        })
    }
}

impl From<&MenuItem> for MenuItemRecord {
    fn from(item: &MenuItem) -> Self {
        MenuItemRecord {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price_cents: item.price.cents(),
            category: item.category.as_str().to_lowercase(),
            image_key: item.image_key.clone(),
            available: item.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> MenuItemRecord {
        MenuItemRecord {
            id: MenuItemId::new(),
            name: name.to_string(),
            description: String::new(),
            price_cents: 8500,
            category: category.to_string(),
            image_key: "burger".to_string(),
            available: true,
        }
    }

    #[test]
    fn valid_record_converts_to_item() {
        let item = MenuItem::try_from(record("Burger", "burgers")).unwrap();
        assert_eq!(item.price, Money::from_rands(85));
        assert_eq!(item.category, Category::Burgers);
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        let item = MenuItem::try_from(record("Pasta", "Mains")).unwrap();
        assert_eq!(item.category, Category::Mains);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = MenuItem::try_from(record("   ", "mains")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = MenuItem::try_from(record("Mystery", "specials")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn item_round_trips_through_record() {
        let item = MenuItem::try_from(record("Burger", "burgers")).unwrap();
        let back = MenuItem::try_from(MenuItemRecord::from(&item)).unwrap();
        assert_eq!(item, back);
    }
}
