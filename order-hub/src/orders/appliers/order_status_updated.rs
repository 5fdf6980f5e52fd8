//! UpdateOrderStatus applier
//!
//! Sets the status without checking the transition; `ready -> placed` is
//! accepted here. Legal transitions are enforced by the command layer.

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// UpdateOrderStatus applier
pub struct OrderStatusUpdatedApplier;

impl ActionApplier for OrderStatusUpdatedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::UpdateOrderStatus { order_id, status } = action
            && let Some(order) = state.orders.iter_mut().find(|o| &o.id == order_id)
        {
            order.status = *status;
        }
    }
}
