//! RemoveFromCart command handler

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::store::StoreAction;

/// RemoveFromCart action
#[derive(Debug, Clone)]
pub struct RemoveFromCartAction {
    pub menu_item_id: String,
}

impl CommandHandler for RemoveFromCartAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        ctx.cart_item(&self.menu_item_id)?;

        Ok(vec![StoreAction::RemoveFromCart {
            menu_item_id: self.menu_item_id.clone(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{cart_item, menu_item, metadata, now, state};

    #[test]
    fn test_remove_requires_item_in_cart() {
        let mut state = state();
        state.cart = vec![cart_item(menu_item("m1", 5.0), "c1", 1)];
        state.cart_chef_id = Some("c1".to_string());
        let ctx = CommandContext::new(&state, now());

        let ok = RemoveFromCartAction {
            menu_item_id: "m1".to_string(),
        };
        assert_eq!(ok.execute(&ctx, &metadata()).unwrap().len(), 1);

        let missing = RemoveFromCartAction {
            menu_item_id: "m2".to_string(),
        };
        assert_eq!(
            missing.execute(&ctx, &metadata()).unwrap_err(),
            OrderError::CartItemNotFound("m2".to_string())
        );
    }
}
