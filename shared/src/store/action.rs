//! Store actions - the closed set of transitions the reducer understands
//!
//! Actions carry fully resolved payloads (a whole `MenuItem`, a whole
//! `Order`) so the reducer never has to look anything up to apply them.

use crate::models::{MenuItem, Order, OrderStatus, PlannedMeal, PrepWindow, Review, SelectedModifier};
use serde::{Deserialize, Serialize};

/// Action type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreActionType {
    // Cart
    AddToCart,
    RemoveFromCart,
    UpdateQuantity,
    ClearCart,

    // Orders
    PlaceOrder,
    UpdateOrderStatus,

    // Chef operations
    ToggleChefOnline,
    SetChefPrepWindow,
    SetChefCapacity,

    // Pre-orders and feedback
    CreatePlannedMeal,
    #[serde(rename = "PREORDER_MEAL")]
    PreOrderMeal,
    AddReview,
    SubscribeWeekly,

    Unknown,
}

impl std::fmt::Display for StoreActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreActionType::AddToCart => write!(f, "ADD_TO_CART"),
            StoreActionType::RemoveFromCart => write!(f, "REMOVE_FROM_CART"),
            StoreActionType::UpdateQuantity => write!(f, "UPDATE_QUANTITY"),
            StoreActionType::ClearCart => write!(f, "CLEAR_CART"),
            StoreActionType::PlaceOrder => write!(f, "PLACE_ORDER"),
            StoreActionType::UpdateOrderStatus => write!(f, "UPDATE_ORDER_STATUS"),
            StoreActionType::ToggleChefOnline => write!(f, "TOGGLE_CHEF_ONLINE"),
            StoreActionType::SetChefPrepWindow => write!(f, "SET_CHEF_PREP_WINDOW"),
            StoreActionType::SetChefCapacity => write!(f, "SET_CHEF_CAPACITY"),
            StoreActionType::CreatePlannedMeal => write!(f, "CREATE_PLANNED_MEAL"),
            StoreActionType::PreOrderMeal => write!(f, "PREORDER_MEAL"),
            StoreActionType::AddReview => write!(f, "ADD_REVIEW"),
            StoreActionType::SubscribeWeekly => write!(f, "SUBSCRIBE_WEEKLY"),
            StoreActionType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Action payload variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    // ========== Cart ==========
    AddToCart {
        menu_item: MenuItem,
        chef_id: String,
        #[serde(default)]
        is_pre_order: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        selected_modifiers: Vec<SelectedModifier>,
    },

    RemoveFromCart {
        menu_item_id: String,
    },

    UpdateQuantity {
        menu_item_id: String,
        delta: i32,
    },

    ClearCart,

    // ========== Orders ==========
    PlaceOrder {
        order: Order,
    },

    UpdateOrderStatus {
        order_id: String,
        status: OrderStatus,
    },

    // ========== Chef operations ==========
    ToggleChefOnline {
        chef_id: String,
    },

    SetChefPrepWindow {
        chef_id: String,
        hours: PrepWindow,
    },

    /// Negative values clamp to zero
    SetChefCapacity {
        chef_id: String,
        capacity: i32,
    },

    // ========== Pre-orders and feedback ==========
    CreatePlannedMeal {
        chef_id: String,
        meal: PlannedMeal,
    },

    #[serde(rename = "PREORDER_MEAL")]
    PreOrderMeal {
        meal_id: String,
        chef_id: String,
    },

    AddReview {
        review: Review,
    },

    /// Acknowledged only; no state effect
    SubscribeWeekly {
        chef_id: String,
    },

    /// Any tag this build does not know; applied as a no-op
    #[serde(other)]
    Unknown,
}

impl StoreAction {
    pub fn action_type(&self) -> StoreActionType {
        match self {
            StoreAction::AddToCart { .. } => StoreActionType::AddToCart,
            StoreAction::RemoveFromCart { .. } => StoreActionType::RemoveFromCart,
            StoreAction::UpdateQuantity { .. } => StoreActionType::UpdateQuantity,
            StoreAction::ClearCart => StoreActionType::ClearCart,
            StoreAction::PlaceOrder { .. } => StoreActionType::PlaceOrder,
            StoreAction::UpdateOrderStatus { .. } => StoreActionType::UpdateOrderStatus,
            StoreAction::ToggleChefOnline { .. } => StoreActionType::ToggleChefOnline,
            StoreAction::SetChefPrepWindow { .. } => StoreActionType::SetChefPrepWindow,
            StoreAction::SetChefCapacity { .. } => StoreActionType::SetChefCapacity,
            StoreAction::CreatePlannedMeal { .. } => StoreActionType::CreatePlannedMeal,
            StoreAction::PreOrderMeal { .. } => StoreActionType::PreOrderMeal,
            StoreAction::AddReview { .. } => StoreActionType::AddReview,
            StoreAction::SubscribeWeekly { .. } => StoreActionType::SubscribeWeekly,
            StoreAction::Unknown => StoreActionType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let action = StoreAction::UpdateQuantity {
            menu_item_id: "m1".to_string(),
            delta: -1,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "UPDATE_QUANTITY");
        assert_eq!(json["menu_item_id"], "m1");
        assert_eq!(json["delta"], -1);
    }

    #[test]
    fn test_preorder_tag_matches_display() {
        let action = StoreAction::PreOrderMeal {
            meal_id: "pm-1".to_string(),
            chef_id: "c1".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.action_type().to_string());
    }

    #[test]
    fn test_action_type_serializes_like_display() {
        for action_type in [
            StoreActionType::PreOrderMeal,
            StoreActionType::AddToCart,
            StoreActionType::SetChefPrepWindow,
            StoreActionType::Unknown,
        ] {
            assert_eq!(
                serde_json::to_value(action_type).unwrap(),
                action_type.to_string()
            );
        }
    }

    #[test]
    fn test_unknown_tag_deserializes_as_unknown() {
        let action: StoreAction =
            serde_json::from_str(r#"{"type":"LOGOUT","user":"x"}"#).unwrap();
        assert_eq!(action, StoreAction::Unknown);
        assert_eq!(action.action_type(), StoreActionType::Unknown);
    }

    #[test]
    fn test_clear_cart_has_no_payload() {
        let action: StoreAction = serde_json::from_str(r#"{"type":"CLEAR_CART"}"#).unwrap();
        assert_eq!(action, StoreAction::ClearCart);
    }
}
