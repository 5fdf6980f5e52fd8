use super::*;
use crate::orders::fixtures::chef;
use shared::models::{OrderStatus, SelectedModifier};
use shared::store::{CommandErrorCode, StoreCommandPayload};

fn create_test_manager() -> StoreManager {
    StoreManager::new(vec![chef("c1"), chef("c2")])
}

fn cmd(payload: StoreCommandPayload) -> StoreCommand {
    StoreCommand::new(payload)
}

// ========================================================================
// Helpers: one call per UI intent
// ========================================================================

fn add_to_cart(manager: &StoreManager, chef_id: &str, menu_item_id: &str) -> CommandResponse {
    manager.execute_command(cmd(StoreCommandPayload::AddToCart {
        chef_id: chef_id.to_string(),
        menu_item_id: menu_item_id.to_string(),
        selected_modifiers: vec![],
    }))
}

fn add_with_modifier(
    manager: &StoreManager,
    menu_item_id: &str,
    modifier_id: &str,
    option_label: &str,
) -> CommandResponse {
    manager.execute_command(cmd(StoreCommandPayload::AddToCart {
        chef_id: "c1".to_string(),
        menu_item_id: menu_item_id.to_string(),
        selected_modifiers: vec![SelectedModifier {
            modifier_id: modifier_id.to_string(),
            option_label: option_label.to_string(),
            price_adjustment: 0.0,
        }],
    }))
}

fn place_order(manager: &StoreManager) -> CommandResponse {
    manager.execute_command(cmd(StoreCommandPayload::PlaceOrder {
        customer_name: "Ravi".to_string(),
        customer_phone: "555-0101".to_string(),
        pickup_slot: "6 PM – 7 PM".to_string(),
    }))
}

/// Add `m1` from `c1` and check out; returns the new order id
fn checkout_one(manager: &StoreManager) -> String {
    let resp = add_to_cart(manager, "c1", "m1");
    assert!(resp.success, "Failed to add to cart: {:?}", resp.error);
    let resp = place_order(manager);
    assert!(resp.success, "Failed to place order: {:?}", resp.error);
    resp.order_id.unwrap()
}

fn set_status(manager: &StoreManager, order_id: &str, status: OrderStatus) -> CommandResponse {
    manager.execute_command(cmd(StoreCommandPayload::UpdateOrderStatus {
        order_id: order_id.to_string(),
        status,
    }))
}

fn assert_error(resp: &CommandResponse, code: CommandErrorCode) {
    assert!(!resp.success, "Expected {code:?}, got success");
    assert_eq!(resp.error.as_ref().map(|e| e.code), Some(code));
}

fn assert_order_status(manager: &StoreManager, order_id: &str, expected: OrderStatus) {
    let order = manager.find_order(order_id).unwrap();
    assert_eq!(order.status, expected, "Order {order_id} status mismatch");
}
