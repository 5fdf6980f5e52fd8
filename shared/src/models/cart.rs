//! Cart Item Model

use super::MenuItem;
use serde::{Deserialize, Serialize};

/// Modifier choice captured when the item was first added
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedModifier {
    pub modifier_id: String,
    pub option_label: String,
    #[serde(default)]
    pub price_adjustment: f64,
}

/// Cart entry
///
/// Quantity stays positive while the entry is in the cart; an entry that
/// reaches zero is dropped by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub chef_id: String,
    pub quantity: i32,
    #[serde(default)]
    pub is_pre_order: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_modifiers: Vec<SelectedModifier>,
}

impl CartItem {
    pub fn new(menu_item: MenuItem, chef_id: impl Into<String>) -> Self {
        Self {
            menu_item,
            chef_id: chef_id.into(),
            quantity: 1,
            is_pre_order: false,
            selected_modifiers: Vec::new(),
        }
    }

    pub fn menu_item_id(&self) -> &str {
        &self.menu_item.id
    }

    /// Sum of the selected modifier adjustments for one unit
    pub fn modifier_adjustment(&self) -> f64 {
        self.selected_modifiers
            .iter()
            .map(|m| m.price_adjustment)
            .sum()
    }
}
