//! Checkout summary

use crate::orders::money::{cart_total, line_total, to_f64};
use crate::utils::format::format_price;
use crate::utils::time::{PickupSlot, generate_pickup_slots};
use chrono::NaiveTime;
use serde::Serialize;
use shared::models::CartItem;
use shared::store::AppState;

/// One cart line as shown at checkout
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: i32,
    pub is_pre_order: bool,
    pub line_total: f64,
    pub display_total: String,
}

/// What the checkout screen renders for the current cart
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub chef_id: Option<String>,
    pub chef_name: Option<String>,
    pub lines: Vec<CartLine>,
    pub item_count: i64,
    pub total: f64,
    pub display_total: String,
    /// Empty when the cart is empty
    pub pickup_slots: Vec<PickupSlot>,
}

impl CartSummary {
    /// Summarize the cart; pickup slots use the cart chef's prep window
    pub fn from_state(state: &AppState, now: NaiveTime) -> Self {
        let chef = state
            .cart_chef_id
            .as_deref()
            .and_then(|id| state.find_chef(id));
        let total = cart_total(&state.cart);

        Self {
            chef_id: state.cart_chef_id.clone(),
            chef_name: chef.map(|c| c.name.clone()),
            lines: state.cart.iter().map(cart_line).collect(),
            item_count: state.cart_item_count(),
            total,
            display_total: format_price(total),
            pickup_slots: chef
                .map(|c| generate_pickup_slots(c.default_prep_window_hours, now))
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn cart_line(item: &CartItem) -> CartLine {
    let total = to_f64(line_total(item));
    CartLine {
        menu_item_id: item.menu_item.id.clone(),
        name: item.menu_item.name.clone(),
        quantity: item.quantity,
        is_pre_order: item.is_pre_order,
        line_total: total,
        display_total: format_price(total),
    }
}
