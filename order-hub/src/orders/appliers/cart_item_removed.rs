//! RemoveFromCart applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// RemoveFromCart applier
///
/// `cart_chef_id` is recomputed from what is left in the cart.
pub struct CartItemRemovedApplier;

impl ActionApplier for CartItemRemovedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::RemoveFromCart { menu_item_id } = action {
            state.cart.retain(|c| &c.menu_item.id != menu_item_id);
            state.cart_chef_id = state.cart.first().map(|c| c.chef_id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{cart_item, menu_item, state};

    fn remove(state: &mut AppState, id: &str) {
        let action = StoreAction::RemoveFromCart {
            menu_item_id: id.to_string(),
        };
        CartItemRemovedApplier.apply(state, &action);
    }

    #[test]
    fn test_remove_one_of_two_keeps_chef() {
        let mut state = state();
        state.cart = vec![
            cart_item(menu_item("m1", 5.0), "c1", 2),
            cart_item(menu_item("m2", 3.0), "c1", 1),
        ];
        state.cart_chef_id = Some("c1".to_string());

        remove(&mut state, "m1");

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart_chef_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_remove_last_clears_chef() {
        let mut state = state();
        state.cart = vec![cart_item(menu_item("m1", 5.0), "c1", 2)];
        state.cart_chef_id = Some("c1".to_string());

        remove(&mut state, "m1");

        assert!(state.cart.is_empty());
        assert!(state.cart_chef_id.is_none());
    }

    #[test]
    fn test_remove_missing_item_keeps_cart() {
        let mut state = state();
        state.cart = vec![cart_item(menu_item("m1", 5.0), "c1", 1)];
        state.cart_chef_id = Some("c1".to_string());

        remove(&mut state, "nope");

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart_chef_id.as_deref(), Some("c1"));
    }
}
