//! SetChefCapacity applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// SetChefCapacity applier
///
/// Negative capacities clamp to zero.
pub struct ChefCapacitySetApplier;

impl ActionApplier for ChefCapacitySetApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::SetChefCapacity { chef_id, capacity } = action
            && let Some(chef) = state.find_chef_mut(chef_id)
        {
            chef.daily_capacity = (*capacity).max(0).unsigned_abs();
        }
    }
}
