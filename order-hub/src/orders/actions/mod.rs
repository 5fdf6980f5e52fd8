//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::store::{StoreAction, StoreCommandPayload};

mod add_review;
mod add_to_cart;
mod chef_settings;
mod clear_cart;
mod create_planned_meal;
mod place_order;
mod preorder_meal;
mod remove_from_cart;
mod subscribe_weekly;
mod update_order_status;
mod update_quantity;

pub use add_review::AddReviewAction;
pub use add_to_cart::AddToCartAction;
pub use chef_settings::{CapacityChange, SetCapacityAction, SetPrepWindowAction, ToggleChefOnlineAction};
pub use clear_cart::ClearCartAction;
pub use create_planned_meal::CreatePlannedMealAction;
pub use place_order::PlaceOrderAction;
pub use preorder_meal::{PreOrderMealAction, pre_order_item};
pub use remove_from_cart::RemoveFromCartAction;
pub use subscribe_weekly::SubscribeWeeklyAction;
pub use update_order_status::{AdvanceOrderAction, UpdateOrderStatusAction};
pub use update_quantity::UpdateQuantityAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    AddToCart(AddToCartAction),
    RemoveFromCart(RemoveFromCartAction),
    UpdateQuantity(UpdateQuantityAction),
    ClearCart(ClearCartAction),
    PlaceOrder(PlaceOrderAction),
    UpdateOrderStatus(UpdateOrderStatusAction),
    AdvanceOrder(AdvanceOrderAction),
    ToggleChefOnline(ToggleChefOnlineAction),
    SetPrepWindow(SetPrepWindowAction),
    SetCapacity(SetCapacityAction),
    CreatePlannedMeal(CreatePlannedMealAction),
    PreOrderMeal(PreOrderMealAction),
    AddReview(AddReviewAction),
    SubscribeWeekly(SubscribeWeeklyAction),
}

/// Manual implementation of CommandHandler for CommandAction
impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        match self {
            CommandAction::AddToCart(action) => action.execute(ctx, metadata),
            CommandAction::RemoveFromCart(action) => action.execute(ctx, metadata),
            CommandAction::UpdateQuantity(action) => action.execute(ctx, metadata),
            CommandAction::ClearCart(action) => action.execute(ctx, metadata),
            CommandAction::PlaceOrder(action) => action.execute(ctx, metadata),
            CommandAction::UpdateOrderStatus(action) => action.execute(ctx, metadata),
            CommandAction::AdvanceOrder(action) => action.execute(ctx, metadata),
            CommandAction::ToggleChefOnline(action) => action.execute(ctx, metadata),
            CommandAction::SetPrepWindow(action) => action.execute(ctx, metadata),
            CommandAction::SetCapacity(action) => action.execute(ctx, metadata),
            CommandAction::CreatePlannedMeal(action) => action.execute(ctx, metadata),
            CommandAction::PreOrderMeal(action) => action.execute(ctx, metadata),
            CommandAction::AddReview(action) => action.execute(ctx, metadata),
            CommandAction::SubscribeWeekly(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert StoreCommandPayload to CommandAction
///
/// This is the ONLY place with a match on StoreCommandPayload.
impl From<&StoreCommandPayload> for CommandAction {
    fn from(payload: &StoreCommandPayload) -> Self {
        match payload {
            StoreCommandPayload::AddToCart {
                chef_id,
                menu_item_id,
                selected_modifiers,
            } => CommandAction::AddToCart(AddToCartAction {
                chef_id: chef_id.clone(),
                menu_item_id: menu_item_id.clone(),
                selected_modifiers: selected_modifiers.clone(),
            }),
            StoreCommandPayload::RemoveFromCart { menu_item_id } => {
                CommandAction::RemoveFromCart(RemoveFromCartAction {
                    menu_item_id: menu_item_id.clone(),
                })
            }
            StoreCommandPayload::UpdateQuantity {
                menu_item_id,
                delta,
            } => CommandAction::UpdateQuantity(UpdateQuantityAction {
                menu_item_id: menu_item_id.clone(),
                delta: *delta,
            }),
            StoreCommandPayload::ClearCart => CommandAction::ClearCart(ClearCartAction),
            StoreCommandPayload::PlaceOrder {
                customer_name,
                customer_phone,
                pickup_slot,
            } => CommandAction::PlaceOrder(PlaceOrderAction {
                customer_name: customer_name.clone(),
                customer_phone: customer_phone.clone(),
                pickup_slot: pickup_slot.clone(),
            }),
            StoreCommandPayload::UpdateOrderStatus { order_id, status } => {
                CommandAction::UpdateOrderStatus(UpdateOrderStatusAction {
                    order_id: order_id.clone(),
                    status: *status,
                })
            }
            StoreCommandPayload::AdvanceOrder { order_id } => {
                CommandAction::AdvanceOrder(AdvanceOrderAction {
                    order_id: order_id.clone(),
                })
            }
            StoreCommandPayload::ToggleChefOnline { chef_id } => {
                CommandAction::ToggleChefOnline(ToggleChefOnlineAction {
                    chef_id: chef_id.clone(),
                })
            }
            StoreCommandPayload::SetChefPrepWindow { chef_id, hours } => {
                CommandAction::SetPrepWindow(SetPrepWindowAction {
                    chef_id: chef_id.clone(),
                    hours: *hours,
                })
            }
            StoreCommandPayload::SetChefCapacity { chef_id, capacity } => {
                CommandAction::SetCapacity(SetCapacityAction {
                    chef_id: chef_id.clone(),
                    change: CapacityChange::Set(*capacity),
                })
            }
            StoreCommandPayload::AdjustChefCapacity { chef_id, delta } => {
                CommandAction::SetCapacity(SetCapacityAction {
                    chef_id: chef_id.clone(),
                    change: CapacityChange::Adjust(*delta),
                })
            }
            StoreCommandPayload::CreatePlannedMeal { chef_id, meal } => {
                CommandAction::CreatePlannedMeal(CreatePlannedMealAction {
                    chef_id: chef_id.clone(),
                    meal: meal.clone(),
                })
            }
            StoreCommandPayload::PreOrderMeal { chef_id, meal_id } => {
                CommandAction::PreOrderMeal(PreOrderMealAction {
                    chef_id: chef_id.clone(),
                    meal_id: meal_id.clone(),
                })
            }
            StoreCommandPayload::AddReview {
                chef_id,
                customer_name,
                rating,
                comment,
            } => CommandAction::AddReview(AddReviewAction {
                chef_id: chef_id.clone(),
                customer_name: customer_name.clone(),
                rating: *rating,
                comment: comment.clone(),
            }),
            StoreCommandPayload::SubscribeWeekly { chef_id } => {
                CommandAction::SubscribeWeekly(SubscribeWeeklyAction {
                    chef_id: chef_id.clone(),
                })
            }
        }
    }
}
