//! CreatePlannedMeal command handler

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_price, validate_required_text, validate_text_len,
};
use shared::models::{PlannedMeal, PlannedMealInput};
use shared::store::StoreAction;
use shared::util::prefixed_id;

/// CreatePlannedMeal action
#[derive(Debug, Clone)]
pub struct CreatePlannedMealAction {
    pub chef_id: String,
    pub meal: PlannedMealInput,
}

impl CommandHandler for CreatePlannedMealAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;
        let input = &self.meal;

        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_text_len(&input.description, "description", MAX_NOTE_LEN)?;
        validate_price(input.price, "price")?;

        let max_orders = input.max_orders.unwrap_or(ctx.default_max_preorders);
        if max_orders == 0 {
            return Err(OrderError::Validation(
                "max_orders must be greater than zero".to_string(),
            ));
        }

        if input.is_limited_drop
            && let Some(expires) = input.drop_expires_at
            && expires <= ctx.now
        {
            return Err(OrderError::Validation(format!(
                "drop_expires_at must be in the future, got {expires}"
            )));
        }

        let meal = PlannedMeal {
            id: prefixed_id("pm"),
            chef_id: chef.id.clone(),
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            image: input.image.clone(),
            price: input.price,
            date: input.date,
            time_slot: input.time_slot,
            max_orders,
            current_orders: 0,
            allergens: input.allergens.clone(),
            is_vegetarian: input.is_vegetarian,
            is_limited_drop: input.is_limited_drop,
            drop_expires_at: input.drop_expires_at.filter(|_| input.is_limited_drop),
        };

        Ok(vec![StoreAction::CreatePlannedMeal {
            chef_id: chef.id.clone(),
            meal,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{meal_date, metadata, now, state};
    use chrono::Duration;
    use shared::models::MealTimeSlot;
    use std::collections::BTreeSet;

    fn input() -> PlannedMealInput {
        PlannedMealInput {
            name: " Sunday Thali ".to_string(),
            description: String::new(),
            image: String::new(),
            price: 15.0,
            date: meal_date(),
            time_slot: MealTimeSlot::Lunch,
            max_orders: None,
            allergens: BTreeSet::new(),
            is_vegetarian: true,
            is_limited_drop: false,
            drop_expires_at: None,
        }
    }

    fn create(meal: PlannedMealInput) -> Result<PlannedMeal, OrderError> {
        let state = state();
        let ctx = CommandContext::new(&state, now()).with_default_max_preorders(12);
        let action = CreatePlannedMealAction {
            chef_id: "c1".to_string(),
            meal,
        };
        let mut actions = action.execute(&ctx, &metadata())?;
        match actions.pop() {
            Some(StoreAction::CreatePlannedMeal { meal, .. }) => Ok(meal),
            other => panic!("Expected CreatePlannedMeal, got {other:?}"),
        }
    }

    #[test]
    fn test_create_assigns_id_and_defaults() {
        let meal = create(input()).unwrap();

        assert!(meal.id.starts_with("pm-"));
        assert_eq!(meal.chef_id, "c1");
        assert_eq!(meal.name, "Sunday Thali");
        assert_eq!(meal.max_orders, 12);
        assert_eq!(meal.current_orders, 0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut blank = input();
        blank.name = "  ".to_string();
        assert!(create(blank).is_err());

        let mut negative = input();
        negative.price = -1.0;
        assert!(create(negative).is_err());

        let mut zero_max = input();
        zero_max.max_orders = Some(0);
        assert!(create(zero_max).is_err());
    }

    #[test]
    fn test_limited_drop_expiry() {
        let mut past = input();
        past.is_limited_drop = true;
        past.drop_expires_at = Some(now() - Duration::hours(1));
        assert!(create(past).is_err());

        let mut future = input();
        future.is_limited_drop = true;
        future.drop_expires_at = Some(now() + Duration::hours(6));
        let meal = create(future).unwrap();
        assert!(meal.drop_expires_at.is_some());

        let mut not_a_drop = input();
        not_a_drop.drop_expires_at = Some(now() + Duration::hours(6));
        assert!(create(not_a_drop).unwrap().drop_expires_at.is_none());
    }
}
