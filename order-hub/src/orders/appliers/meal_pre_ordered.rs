//! PreOrderMeal applier
//!
//! Increments `current_orders` with no sold-out check; the command layer
//! rejects pre-orders once `current_orders` reaches `max_orders`.

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// PreOrderMeal applier
pub struct MealPreOrderedApplier;

impl ActionApplier for MealPreOrderedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::PreOrderMeal { meal_id, chef_id } = action
            && let Some(meal) = state
                .find_chef_mut(chef_id)
                .and_then(|c| c.planned_meals.iter_mut().find(|m| &m.id == meal_id))
        {
            meal.current_orders = meal.current_orders.saturating_add(1);
        }
    }
}
