//! `plateup-menu` — menu catalog: items, categories, customization options.

pub mod item;
pub mod options;
pub mod seed;

pub use item::{Category, MenuItem, MenuItemRecord};
pub use options::{Extra, OptionCatalog, MAX_SIDES};
