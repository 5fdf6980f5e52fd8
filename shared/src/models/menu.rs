//! Menu Item Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Allergen tags shown on menu items and planned meals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AllergenTag {
    Nuts,
    Dairy,
    Gluten,
    Eggs,
    Soy,
    Shellfish,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub allergens: BTreeSet<AllergenTag>,
    pub is_veg: bool,
    /// Modifier groups; each offers mutually exclusive options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<MenuModifier>,
}

impl MenuItem {
    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    pub fn find_modifier(&self, modifier_id: &str) -> Option<&MenuModifier> {
        self.modifiers.iter().find(|m| m.id == modifier_id)
    }
}

/// Modifier group (e.g. "Spice level")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuModifier {
    pub id: String,
    pub name: String,
    pub options: Vec<ModifierOption>,
}

impl MenuModifier {
    pub fn find_option(&self, label: &str) -> Option<&ModifierOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// A single choice inside a modifier group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModifierOption {
    pub label: String,
    #[serde(default)]
    pub price_adjustment: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_defaults_from_json() {
        let json = r#"{"id":"m1","name":"Dal Makhani","price":8.5,"isVeg":true}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, "m1");
        assert!(item.allergens.is_empty());
        assert!(!item.has_modifiers());
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_allergens_deduplicate() {
        let json = r#"{"id":"m1","name":"Kheer","price":4.0,"isVeg":true,"allergens":["dairy","nuts","dairy"]}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.allergens.len(), 2);
        assert!(item.allergens.contains(&AllergenTag::Dairy));
    }

    #[test]
    fn test_find_modifier_option() {
        let item = MenuItem {
            id: "m1".to_string(),
            name: "Biryani".to_string(),
            price: 12.0,
            description: String::new(),
            allergens: BTreeSet::new(),
            is_veg: false,
            modifiers: vec![MenuModifier {
                id: "spice".to_string(),
                name: "Spice level".to_string(),
                options: vec![
                    ModifierOption {
                        label: "Mild".to_string(),
                        price_adjustment: 0.0,
                    },
                    ModifierOption {
                        label: "Extra hot".to_string(),
                        price_adjustment: 0.5,
                    },
                ],
            }],
        };

        let group = item.find_modifier("spice").unwrap();
        assert_eq!(group.find_option("Extra hot").unwrap().price_adjustment, 0.5);
        assert!(group.find_option("Volcanic").is_none());
        assert!(item.find_modifier("size").is_none());
    }
}
