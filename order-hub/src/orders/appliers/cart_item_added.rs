//! AddToCart applier
//!
//! Switching chefs replaces the cart with the new item. A repeat add of the
//! same menu item bumps its quantity and keeps the first entry's modifiers
//! and pre-order flag.

use crate::orders::traits::ActionApplier;
use shared::models::CartItem;
use shared::store::{AppState, StoreAction};

/// AddToCart applier
pub struct CartItemAddedApplier;

impl ActionApplier for CartItemAddedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::AddToCart {
            menu_item,
            chef_id,
            is_pre_order,
            selected_modifiers,
        } = action
        {
            let other_chef = state.cart_chef_id.as_deref() != Some(chef_id.as_str());
            if other_chef && !state.cart.is_empty() {
                state.cart.clear();
            }

            if let Some(existing) = state
                .cart
                .iter_mut()
                .find(|c| c.menu_item.id == menu_item.id)
            {
                existing.quantity = existing.quantity.saturating_add(1);
            } else {
                state.cart.push(CartItem {
                    menu_item: menu_item.clone(),
                    chef_id: chef_id.clone(),
                    quantity: 1,
                    is_pre_order: *is_pre_order,
                    selected_modifiers: selected_modifiers.clone(),
                });
            }

            state.cart_chef_id = Some(chef_id.clone());
        }
    }
}
