//! UpdateOrderStatus and AdvanceOrder command handlers
//!
//! Only the chef-side transitions are accepted:
//! `placed -> accepted -> cooking -> ready`, and `placed -> declined`.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::models::OrderStatus;
use shared::store::StoreAction;

/// UpdateOrderStatus action
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusAction {
    pub order_id: String,
    pub status: OrderStatus,
}

impl CommandHandler for UpdateOrderStatusAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let order = ctx.order(&self.order_id)?;
        if !order.status.can_transition_to(self.status) {
            return Err(OrderError::InvalidTransition {
                from: order.status.to_string(),
                to: self.status.to_string(),
            });
        }

        Ok(vec![StoreAction::UpdateOrderStatus {
            order_id: order.id.clone(),
            status: self.status,
        }])
    }
}

/// AdvanceOrder action: move to the single forward successor
#[derive(Debug, Clone)]
pub struct AdvanceOrderAction {
    pub order_id: String,
}

impl CommandHandler for AdvanceOrderAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let order = ctx.order(&self.order_id)?;
        let Some(next) = order.status.next() else {
            return Err(OrderError::InvalidTransition {
                from: order.status.to_string(),
                to: "none".to_string(),
            });
        };

        UpdateOrderStatusAction {
            order_id: self.order_id.clone(),
            status: next,
        }
        .execute(ctx, metadata)
    }
}
