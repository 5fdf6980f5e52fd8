//! Store commands - intents sent by the UI
//!
//! A command is validated against the current state before the store turns
//! it into one or more [`StoreAction`](super::StoreAction)s.

use crate::models::{OrderStatus, PlannedMealInput, PrepWindow, SelectedModifier};
use crate::util::{new_command_id, now_millis};
use serde::{Deserialize, Serialize};

/// Command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCommand {
    /// Idempotency key; repeated ids are acknowledged without re-applying
    #[serde(default = "new_command_id")]
    pub command_id: String,
    /// Client timestamp (Unix milliseconds), kept for logs only
    #[serde(default = "now_millis")]
    pub timestamp: i64,
    pub payload: StoreCommandPayload,
}

impl StoreCommand {
    pub fn new(payload: StoreCommandPayload) -> Self {
        Self {
            command_id: new_command_id(),
            timestamp: now_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreCommandPayload {
    // ========== Cart ==========
    AddToCart {
        chef_id: String,
        menu_item_id: String,
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
        customer_name: String,
        customer_phone: String,
        pickup_slot: String,
    },

    UpdateOrderStatus {
        order_id: String,
        status: OrderStatus,
    },

    /// Move an order to its single forward successor
    AdvanceOrder {
        order_id: String,
    },

    // ========== Chef operations ==========
    ToggleChefOnline {
        chef_id: String,
    },

    SetChefPrepWindow {
        chef_id: String,
        hours: PrepWindow,
    },

    SetChefCapacity {
        chef_id: String,
        capacity: i32,
    },

    /// Relative capacity change (the +/- stepper in chef mode)
    AdjustChefCapacity {
        chef_id: String,
        delta: i32,
    },

    // ========== Pre-orders and feedback ==========
    CreatePlannedMeal {
        chef_id: String,
        meal: PlannedMealInput,
    },

    #[serde(rename = "PREORDER_MEAL")]
    PreOrderMeal {
        chef_id: String,
        meal_id: String,
    },

    AddReview {
        chef_id: String,
        customer_name: String,
        rating: u8,
        #[serde(default)]
        comment: String,
    },

    SubscribeWeekly {
        chef_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_defaults_from_json() {
        let json = r#"{"payload":{"type":"TOGGLE_CHEF_ONLINE","chef_id":"c1"}}"#;
        let cmd: StoreCommand = serde_json::from_str(json).unwrap();

        assert!(!cmd.command_id.is_empty());
        assert!(cmd.timestamp > 0);
        assert_eq!(
            cmd.payload,
            StoreCommandPayload::ToggleChefOnline {
                chef_id: "c1".to_string()
            }
        );
    }

    #[test]
    fn test_command_ids_are_unique() {
        let a = StoreCommand::new(StoreCommandPayload::ClearCart);
        let b = StoreCommand::new(StoreCommandPayload::ClearCart);
        assert_ne!(a.command_id, b.command_id);
    }

    #[test]
    fn test_place_order_wire_format() {
        let json = r#"{
            "command_id": "cmd-1",
            "timestamp": 1,
            "payload": {
                "type": "PLACE_ORDER",
                "customer_name": "Ravi",
                "customer_phone": "555-0101",
                "pickup_slot": "6 PM – 7 PM"
            }
        }"#;
        let cmd: StoreCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.command_id, "cmd-1");
        assert!(matches!(cmd.payload, StoreCommandPayload::PlaceOrder { .. }));
    }
}
