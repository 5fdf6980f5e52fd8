//! SubscribeWeekly command handler
//!
//! Accepted only for chefs offering a weekly plan. The emitted action has
//! no state effect.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::store::StoreAction;

/// SubscribeWeekly action
#[derive(Debug, Clone)]
pub struct SubscribeWeeklyAction {
    pub chef_id: String,
}

impl CommandHandler for SubscribeWeeklyAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;
        if chef.weekly_plan.is_none() {
            return Err(OrderError::NoWeeklyPlan(chef.name.clone()));
        }

        Ok(vec![StoreAction::SubscribeWeekly {
            chef_id: chef.id.clone(),
        }])
    }
}
