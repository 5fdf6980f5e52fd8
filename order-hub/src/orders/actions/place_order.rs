//! PlaceOrder command handler
//!
//! Checkout checks, in the order the customer sees them:
//! 1. cart is not empty
//! 2. customer name and phone are present
//! 3. a pickup slot was chosen
//! 4. the chef is online
//! 5. the chef still has capacity today
//!
//! The handler snapshots the cart into a new `Order`; the reducer then
//! appends it, takes one slot off the chef's capacity and clears the cart.

use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text, validate_text_len};
use shared::models::{Order, OrderStatus};
use shared::store::StoreAction;
use shared::util::generate_order_id;

/// Attempts at drawing an order id not already in use
const ORDER_ID_ATTEMPTS: usize = 8;

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_slot: String,
}

impl CommandHandler for PlaceOrderAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let state = ctx.state;

        // 1. Cart
        let Some(first) = state.cart.first() else {
            return Err(OrderError::CartEmpty);
        };

        // 2. Customer details
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(OrderError::CustomerNameRequired);
        }
        validate_text_len(customer_name, "customer_name", MAX_NAME_LEN)?;

        let customer_phone = self.customer_phone.trim();
        if customer_phone.is_empty() {
            return Err(OrderError::CustomerPhoneRequired);
        }
        validate_text_len(customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;

        // 3. Pickup slot
        validate_required_text(&self.pickup_slot, "pickup_slot", MAX_SHORT_TEXT_LEN)?;

        // 4-5. Chef availability
        let chef_id = state.cart_chef_id.as_deref().unwrap_or(&first.chef_id);
        let chef = ctx.chef(chef_id)?;
        if !chef.is_online {
            return Err(OrderError::ChefOffline(chef.name.clone()));
        }
        if !chef.has_capacity() {
            return Err(OrderError::CapacityFull(chef.name.clone()));
        }

        let order = Order {
            id: unused_order_id(ctx),
            chef_id: chef.id.clone(),
            customer_name: customer_name.to_string(),
            customer_phone: customer_phone.to_string(),
            items: state.cart.clone(),
            total: money::cart_total(&state.cart),
            pickup_slot: self.pickup_slot.trim().to_string(),
            status: OrderStatus::Placed,
            created_at: ctx.now.timestamp_millis(),
        };

        Ok(vec![StoreAction::PlaceOrder { order }])
    }
}

fn unused_order_id(ctx: &CommandContext<'_>) -> String {
    let mut id = generate_order_id();
    for _ in 1..ORDER_ID_ATTEMPTS {
        if ctx.state.find_order(&id).is_none() {
            break;
        }
        id = generate_order_id();
    }
    id
}
