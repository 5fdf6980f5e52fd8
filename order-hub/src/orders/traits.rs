//! Core traits of the store
//!
//! - [`CommandHandler`]: validates one command against the current state and
//!   emits the actions to apply
//! - [`ActionApplier`]: applies one action to the state (pure, never fails)

use chrono::{DateTime, Utc};
use enum_dispatch::enum_dispatch;
use shared::models::{CartItem, Chef, Order, PlannedMeal};
use shared::store::{AppState, CommandError, CommandErrorCode, StoreAction};
use thiserror::Error;

use crate::core::config::DEFAULT_MAX_PREORDERS;

/// Business-rule failures raised by command handlers
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Cart is empty")]
    CartEmpty,

    #[error("Customer name is required")]
    CustomerNameRequired,

    #[error("Customer phone is required")]
    CustomerPhoneRequired,

    #[error("Chef is offline: {0}")]
    ChefOffline(String),

    #[error("Chef has no capacity left today: {0}")]
    CapacityFull(String),

    #[error("Meal is sold out: {0}")]
    MealSoldOut(String),

    #[error("Drop has expired: {0}")]
    DropExpired(String),

    #[error("Chef has no weekly plan: {0}")]
    NoWeeklyPlan(String),

    #[error("Chef not found: {0}")]
    ChefNotFound(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Item not in cart: {0}")]
    CartItemNotFound(String),

    #[error("Planned meal not found: {0}")]
    MealNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("{0}")]
    Validation(String),
}

impl OrderError {
    pub fn code(&self) -> CommandErrorCode {
        match self {
            OrderError::CartEmpty => CommandErrorCode::CartEmpty,
            OrderError::CustomerNameRequired => CommandErrorCode::CustomerNameRequired,
            OrderError::CustomerPhoneRequired => CommandErrorCode::CustomerPhoneRequired,
            OrderError::ChefOffline(_) => CommandErrorCode::ChefOffline,
            OrderError::CapacityFull(_) => CommandErrorCode::CapacityFull,
            OrderError::MealSoldOut(_) => CommandErrorCode::MealSoldOut,
            OrderError::DropExpired(_) => CommandErrorCode::DropExpired,
            OrderError::NoWeeklyPlan(_) => CommandErrorCode::NoWeeklyPlan,
            OrderError::ChefNotFound(_) => CommandErrorCode::ChefNotFound,
            OrderError::MenuItemNotFound(_) => CommandErrorCode::MenuItemNotFound,
            OrderError::CartItemNotFound(_) => CommandErrorCode::CartItemNotFound,
            OrderError::MealNotFound(_) => CommandErrorCode::MealNotFound,
            OrderError::OrderNotFound(_) => CommandErrorCode::OrderNotFound,
            OrderError::InvalidTransition { .. } => CommandErrorCode::InvalidTransition,
            OrderError::Validation(_) => CommandErrorCode::ValidationFailed,
        }
    }
}

impl From<OrderError> for CommandError {
    fn from(err: OrderError) -> Self {
        CommandError::new(err.code(), err.to_string())
    }
}

/// Read-only view of the state handed to command handlers
pub struct CommandContext<'a> {
    pub state: &'a AppState,
    /// Wall clock used for drop expiry and review dates
    pub now: DateTime<Utc>,
    /// Planned meal capacity when the chef leaves it blank
    pub default_max_preorders: u32,
}

impl<'a> CommandContext<'a> {
    pub fn new(state: &'a AppState, now: DateTime<Utc>) -> Self {
        Self {
            state,
            now,
            default_max_preorders: DEFAULT_MAX_PREORDERS,
        }
    }

    pub fn with_default_max_preorders(mut self, max_orders: u32) -> Self {
        self.default_max_preorders = max_orders;
        self
    }

    pub fn chef(&self, chef_id: &str) -> Result<&'a Chef, OrderError> {
        self.state
            .find_chef(chef_id)
            .ok_or_else(|| OrderError::ChefNotFound(chef_id.to_string()))
    }

    pub fn order(&self, order_id: &str) -> Result<&'a Order, OrderError> {
        self.state
            .find_order(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    pub fn cart_item(&self, menu_item_id: &str) -> Result<&'a CartItem, OrderError> {
        self.state
            .find_cart_item(menu_item_id)
            .ok_or_else(|| OrderError::CartItemNotFound(menu_item_id.to_string()))
    }

    /// Quantity of `menu_item_id` already in the cart for `chef_id`; an
    /// entry from another chef counts as zero since adding replaces the cart
    pub fn cart_quantity(&self, chef_id: &str, menu_item_id: &str) -> i32 {
        self.state
            .find_cart_item(menu_item_id)
            .filter(|entry| entry.chef_id == chef_id)
            .map_or(0, |entry| entry.quantity)
    }

    pub fn planned_meal(&self, chef_id: &str, meal_id: &str) -> Result<&'a PlannedMeal, OrderError> {
        self.chef(chef_id)?
            .find_planned_meal(meal_id)
            .ok_or_else(|| OrderError::MealNotFound(meal_id.to_string()))
    }
}

/// Command metadata carried from the envelope into handlers
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
}

/// Command handler
///
/// Implementations never mutate state; they either reject the command or
/// return the actions that carry it out.
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError>;
}

/// Action applier
///
/// Appliers are total: an action that targets a missing chef, order or
/// cart entry leaves the state untouched.
#[enum_dispatch]
pub trait ActionApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction);
}
