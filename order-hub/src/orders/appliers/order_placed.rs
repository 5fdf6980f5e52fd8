//! PlaceOrder applier
//!
//! Appends the order, takes one slot off the chef's daily capacity (never
//! below zero) and empties the cart. Online status and remaining capacity
//! are not checked here.

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// PlaceOrder applier
pub struct OrderPlacedApplier;

impl ActionApplier for OrderPlacedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::PlaceOrder { order } = action {
            if let Some(chef) = state.find_chef_mut(&order.chef_id) {
                chef.daily_capacity = chef.daily_capacity.saturating_sub(1);
            }
            state.orders.push(order.clone());
            state.cart.clear();
            state.cart_chef_id = None;
        }
    }
}
