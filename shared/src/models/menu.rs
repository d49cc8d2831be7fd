//! Menu Model (菜单与供应状态)

use serde::{Deserialize, Serialize};

/// Menu item annotated with current availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemView {
    pub name: String,
    /// Public image path
    pub image: String,
    pub available: bool,
}

/// Menu category with its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategoryView {
    pub name: String,
    pub items: Vec<MenuItemView>,
}

/// Set availability payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    /// Older kitchen pages send `name`
    #[serde(default, alias = "name")]
    pub item_name: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}
