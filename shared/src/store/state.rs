//! Application state - the single aggregate owned by the store
//!
//! `cart_chef_id` is denormalized: it equals the `chef_id` of every cart
//! entry, or is `None` when the cart is empty.

use crate::models::{CartItem, Chef, Order, PlannedMeal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub cart: Vec<CartItem>,
    pub cart_chef_id: Option<String>,
    /// Append-only, placement order preserved
    pub orders: Vec<Order>,
    pub chefs: Vec<Chef>,
    /// Number of actions applied so far
    #[serde(default)]
    pub last_sequence: u64,
}

impl AppState {
    pub fn with_chefs(chefs: Vec<Chef>) -> Self {
        Self {
            chefs,
            ..Self::default()
        }
    }

    pub fn find_chef(&self, chef_id: &str) -> Option<&Chef> {
        self.chefs.iter().find(|c| c.id == chef_id)
    }

    pub fn find_chef_mut(&mut self, chef_id: &str) -> Option<&mut Chef> {
        self.chefs.iter_mut().find(|c| c.id == chef_id)
    }

    pub fn find_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn find_cart_item(&self, menu_item_id: &str) -> Option<&CartItem> {
        self.cart.iter().find(|c| c.menu_item.id == menu_item_id)
    }

    pub fn find_planned_meal(&self, chef_id: &str, meal_id: &str) -> Option<&PlannedMeal> {
        self.find_chef(chef_id)
            .and_then(|c| c.find_planned_meal(meal_id))
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total units across all cart entries, widened so no quantities can
    /// overflow the sum
    pub fn cart_item_count(&self) -> i64 {
        self.cart.iter().map(|c| i64::from(c.quantity)).sum()
    }

    /// `cart_chef_id` agrees with every cart entry (or both are empty)
    pub fn cart_is_consistent(&self) -> bool {
        match &self.cart_chef_id {
            None => self.cart.is_empty(),
            Some(chef_id) => {
                !self.cart.is_empty() && self.cart.iter().all(|c| &c.chef_id == chef_id)
            }
        }
    }
}
