//! UpdateQuantity applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// UpdateQuantity applier
///
/// Entries whose quantity drops to zero or below are removed.
pub struct CartQuantityUpdatedApplier;

impl ActionApplier for CartQuantityUpdatedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::UpdateQuantity {
            menu_item_id,
            delta,
        } = action
        {
            if let Some(entry) = state
                .cart
                .iter_mut()
                .find(|c| &c.menu_item.id == menu_item_id)
            {
                entry.quantity = entry.quantity.saturating_add(*delta);
            }
            state.cart.retain(|c| c.quantity > 0);
            if state.cart.is_empty() {
                state.cart_chef_id = None;
            }
        }
    }
}
