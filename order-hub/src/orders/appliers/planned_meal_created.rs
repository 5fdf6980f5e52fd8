//! CreatePlannedMeal applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// CreatePlannedMeal applier
pub struct PlannedMealCreatedApplier;

impl ActionApplier for PlannedMealCreatedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::CreatePlannedMeal { chef_id, meal } = action
            && let Some(chef) = state.find_chef_mut(chef_id)
        {
            chef.planned_meals.push(meal.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{planned_meal, state};

    #[test]
    fn test_meal_appended_to_chef() {
        let mut state = state();
        let action = StoreAction::CreatePlannedMeal {
            chef_id: "c2".to_string(),
            meal: planned_meal("pm-new", "c2", 6, 0),
        };

        PlannedMealCreatedApplier.apply(&mut state, &action);

        let chef = state.find_chef("c2").unwrap();
        assert_eq!(chef.planned_meals.len(), 2);
        assert_eq!(chef.planned_meals[1].id, "pm-new");
        assert_eq!(state.find_chef("c1").unwrap().planned_meals.len(), 1);
    }
}
