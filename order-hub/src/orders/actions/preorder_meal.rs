//! PreOrderMeal command handler
//!
//! Reserves a spot on a planned meal and puts a pre-order line for it in
//! the cart. The line is a synthetic menu item keyed by the meal id, so
//! repeat pre-orders of the same meal bump its quantity.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use crate::utils::validation::validate_quantity_change;
use shared::models::{MenuItem, PlannedMeal};
use shared::store::StoreAction;

/// PreOrderMeal action
#[derive(Debug, Clone)]
pub struct PreOrderMealAction {
    pub chef_id: String,
    pub meal_id: String,
}

impl CommandHandler for PreOrderMealAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let meal = ctx.planned_meal(&self.chef_id, &self.meal_id)?;

        if meal.is_expired_at(ctx.now) {
            return Err(OrderError::DropExpired(meal.name.clone()));
        }
        if meal.is_sold_out() {
            return Err(OrderError::MealSoldOut(meal.name.clone()));
        }
        validate_quantity_change(ctx.cart_quantity(&self.chef_id, &meal.id), 1)?;

        Ok(vec![
            StoreAction::PreOrderMeal {
                meal_id: meal.id.clone(),
                chef_id: self.chef_id.clone(),
            },
            StoreAction::AddToCart {
                menu_item: pre_order_item(meal),
                chef_id: self.chef_id.clone(),
                is_pre_order: true,
                selected_modifiers: vec![],
            },
        ])
    }
}

/// Cart line for a planned meal, e.g. `Undhiyu (Pre-order)` described as
/// `2026-10-20 · Dinner`
pub fn pre_order_item(meal: &PlannedMeal) -> MenuItem {
    MenuItem {
        id: meal.id.clone(),
        name: format!("{} (Pre-order)", meal.name),
        price: meal.price,
        description: format!("{} · {}", meal.date, meal.time_slot.label()),
        allergens: meal.allergens.clone(),
        is_veg: meal.is_vegetarian,
        modifiers: vec![],
    }
}
