//! Fallback menu used to bootstrap a fresh store (dev/test).

use plateup_core::{MenuItemId, Money};

use crate::item::{Category, MenuItem};

fn item(name: &str, description: &str, rands: u64, image: &str, category: Category) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_rands(rands),
        category,
        image_key: image.to_string(),
        available: true,
    }
}

/// The standard 18-item menu shipped as local fallback data.
pub fn standard_menu() -> Vec<MenuItem> {
    use Category::*;

    vec![
        item("Burger", "Juicy beef burger", 85, "burger", Burgers),
        item("Beef Wrap", "Beef wrap with vegetables", 75, "wrap", Mains),
        item("Salad & Chicken", "Fresh garden salad with chicken", 65, "salad", Starters),
        item("Pasta", "Creamy alfredo pasta", 70, "pasta", Mains),
        item("Sushi", "Fresh sushi rolls", 95, "sushi", Mains),
        item("Waffle", "Sweet waffle with toppings", 45, "waffle", Desserts),
        item("Oreo Roller", "Oreo ice cream roll", 35, "oreo", Desserts),
        item("Honey Tarts", "Sweet honey tarts", 25, "tarts", Desserts),
        item("Chocolate Milkshake", "Chocolate milkshake", 40, "shake-choc", Beverages),
        item("Raspberry Cocktail", "Fresh raspberry cocktail", 50, "cocktail", Alcohols),
        item("Syrup Drink", "Refreshing syrup drink", 30, "syrup", Beverages),
        item("Virgin Mojito", "Non-alcoholic mojito", 35, "mojito", Beverages),
        item("Strawberry Milkshake", "Fresh strawberry milkshake", 40, "shake-straw", Beverages),
        item("Coke", "Cold Coca Cola", 20, "coke", Beverages),
        item("Special Sauce", "Chef special sauce combo", 45, "sauce", Mains),
        item("Fruit Salad", "Premium mixed fruit salad", 85, "fruit-salad", Starters),
        item("Green Salad", "Fresh green salad", 35, "green-salad", Starters),
        item("Fries", "Crispy golden fries", 30, "fries", Starters),
    ]
}
