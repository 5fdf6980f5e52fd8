//! Action applier implementations
//!
//! Each applier implements the `ActionApplier` trait and handles one
//! `StoreAction` variant. Appliers are PURE functions of the state and the
//! action; they perform no validation.

use enum_dispatch::enum_dispatch;

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

mod cart_cleared;
mod cart_item_added;
mod cart_item_removed;
mod cart_quantity_updated;
mod chef_capacity_set;
mod chef_online_toggled;
mod chef_prep_window_set;
mod meal_pre_ordered;
mod order_placed;
mod order_status_updated;
mod planned_meal_created;
mod review_added;
mod weekly_subscribed;

pub use cart_cleared::CartClearedApplier;
pub use cart_item_added::CartItemAddedApplier;
pub use cart_item_removed::CartItemRemovedApplier;
pub use cart_quantity_updated::CartQuantityUpdatedApplier;
pub use chef_capacity_set::ChefCapacitySetApplier;
pub use chef_online_toggled::ChefOnlineToggledApplier;
pub use chef_prep_window_set::ChefPrepWindowSetApplier;
pub use meal_pre_ordered::MealPreOrderedApplier;
pub use order_placed::OrderPlacedApplier;
pub use order_status_updated::OrderStatusUpdatedApplier;
pub use planned_meal_created::PlannedMealCreatedApplier;
pub use review_added::ReviewAddedApplier;
pub use weekly_subscribed::{IgnoredApplier, WeeklySubscribedApplier};

/// ApplierAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(ActionApplier)]
pub enum ApplierAction {
    CartItemAdded(CartItemAddedApplier),
    CartItemRemoved(CartItemRemovedApplier),
    CartQuantityUpdated(CartQuantityUpdatedApplier),
    CartCleared(CartClearedApplier),
    OrderPlaced(OrderPlacedApplier),
    OrderStatusUpdated(OrderStatusUpdatedApplier),
    ChefOnlineToggled(ChefOnlineToggledApplier),
    ChefPrepWindowSet(ChefPrepWindowSetApplier),
    ChefCapacitySet(ChefCapacitySetApplier),
    PlannedMealCreated(PlannedMealCreatedApplier),
    MealPreOrdered(MealPreOrderedApplier),
    ReviewAdded(ReviewAddedApplier),
    WeeklySubscribed(WeeklySubscribedApplier),
    Ignored(IgnoredApplier),
}

/// Convert StoreAction reference to ApplierAction
///
/// This is the ONLY place with a match on StoreAction.
impl From<&StoreAction> for ApplierAction {
    fn from(action: &StoreAction) -> Self {
        match action {
            StoreAction::AddToCart { .. } => ApplierAction::CartItemAdded(CartItemAddedApplier),
            StoreAction::RemoveFromCart { .. } => {
                ApplierAction::CartItemRemoved(CartItemRemovedApplier)
            }
            StoreAction::UpdateQuantity { .. } => {
                ApplierAction::CartQuantityUpdated(CartQuantityUpdatedApplier)
            }
            StoreAction::ClearCart => ApplierAction::CartCleared(CartClearedApplier),
            StoreAction::PlaceOrder { .. } => ApplierAction::OrderPlaced(OrderPlacedApplier),
            StoreAction::UpdateOrderStatus { .. } => {
                ApplierAction::OrderStatusUpdated(OrderStatusUpdatedApplier)
            }
            StoreAction::ToggleChefOnline { .. } => {
                ApplierAction::ChefOnlineToggled(ChefOnlineToggledApplier)
            }
            StoreAction::SetChefPrepWindow { .. } => {
                ApplierAction::ChefPrepWindowSet(ChefPrepWindowSetApplier)
            }
            StoreAction::SetChefCapacity { .. } => {
                ApplierAction::ChefCapacitySet(ChefCapacitySetApplier)
            }
            StoreAction::CreatePlannedMeal { .. } => {
                ApplierAction::PlannedMealCreated(PlannedMealCreatedApplier)
            }
            StoreAction::PreOrderMeal { .. } => ApplierAction::MealPreOrdered(MealPreOrderedApplier),
            StoreAction::AddReview { .. } => ApplierAction::ReviewAdded(ReviewAddedApplier),
            StoreAction::SubscribeWeekly { .. } => {
                ApplierAction::WeeklySubscribed(WeeklySubscribedApplier)
            }
            StoreAction::Unknown => ApplierAction::Ignored(IgnoredApplier),
        }
    }
}

/// Apply one action in place
pub fn apply(state: &mut AppState, action: &StoreAction) {
    ApplierAction::from(action).apply(state, action);
}
