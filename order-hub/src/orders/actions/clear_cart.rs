//! ClearCart command handler

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::store::StoreAction;

/// ClearCart action (always accepted)
#[derive(Debug, Clone)]
pub struct ClearCartAction;

impl CommandHandler for ClearCartAction {
    fn execute(
        &self,
        _ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        Ok(vec![StoreAction::ClearCart])
    }
}
