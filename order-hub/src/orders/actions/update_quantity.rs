//! UpdateQuantity command handler
//!
//! A delta that takes the quantity to zero or below is allowed; the entry is
//! then removed by the reducer. Increases stop at `MAX_QUANTITY`.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use crate::utils::validation::validate_quantity_change;
use shared::store::StoreAction;

/// UpdateQuantity action
#[derive(Debug, Clone)]
pub struct UpdateQuantityAction {
    pub menu_item_id: String,
    pub delta: i32,
}

impl CommandHandler for UpdateQuantityAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        if self.delta == 0 {
            return Err(OrderError::Validation(
                "Quantity change must be non-zero".to_string(),
            ));
        }
        let entry = ctx.cart_item(&self.menu_item_id)?;
        validate_quantity_change(entry.quantity, self.delta)?;

        Ok(vec![StoreAction::UpdateQuantity {
            menu_item_id: self.menu_item_id.clone(),
            delta: self.delta,
        }])
    }
}
