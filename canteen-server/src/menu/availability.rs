use std::collections::HashMap;

use parking_lot::RwLock;
use shared::models::{MenuCategoryView, MenuItemView};
use thiserror::Error;

use super::catalog::MENU;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Item name is required")]
    EmptyItemName,
}

impl From<MenuError> for shared::AppError {
    fn from(err: MenuError) -> Self {
        shared::AppError::with_message(shared::ErrorCode::MenuItemNameRequired, err.to_string())
            .with_detail("field", "item_name")
    }
}

/// Menu item availability keyed by lower-cased name
///
/// Items never configured are available.
#[derive(Debug, Default)]
pub struct AvailabilityRegistry {
    items: RwLock<HashMap<String, bool>>,
}

fn item_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl AvailabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, item_name: &str, available: bool) -> Result<(), MenuError> {
        let key = item_key(item_name);
        if key.is_empty() {
            return Err(MenuError::EmptyItemName);
        }
        tracing::info!(item = %key, available, "Menu availability changed");
        self.items.write().insert(key, available);
        Ok(())
    }

    pub fn is_available(&self, item_name: &str) -> bool {
        self.items
            .read()
            .get(&item_key(item_name))
            .copied()
            .unwrap_or(true)
    }

    /// Full catalog annotated with availability
    pub fn list_with_availability(&self) -> Vec<MenuCategoryView> {
        let items = self.items.read();
        MENU.iter()
            .map(|(category, entries)| MenuCategoryView {
                name: category.to_string(),
                items: entries
                    .iter()
                    .map(|(name, image)| MenuItemView {
                        name: name.to_string(),
                        image: image.to_string(),
                        available: items.get(&item_key(name)).copied().unwrap_or(true),
                    })
                    .collect(),
            })
            .collect()
    }
}
