//! ClearCart applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// ClearCart applier
pub struct CartClearedApplier;

impl ActionApplier for CartClearedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::ClearCart = action {
            state.cart.clear();
            state.cart_chef_id = None;
        }
    }
}
