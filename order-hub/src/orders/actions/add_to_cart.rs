//! AddToCart command handler
//!
//! Resolves the menu item on the chef's menu and checks the modifier
//! choices: every selection must name an existing group and option of that
//! item, with at most one option per group. Price adjustments are taken
//! from the menu, not from the request.

use std::collections::HashSet;

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use crate::utils::validation::validate_quantity_change;
use shared::models::{MenuItem, SelectedModifier};
use shared::store::StoreAction;

/// AddToCart action
#[derive(Debug, Clone)]
pub struct AddToCartAction {
    pub chef_id: String,
    pub menu_item_id: String,
    pub selected_modifiers: Vec<SelectedModifier>,
}

impl AddToCartAction {
    fn resolve_modifiers(&self, item: &MenuItem) -> Result<Vec<SelectedModifier>, OrderError> {
        let mut seen_groups = HashSet::new();
        let mut resolved = Vec::with_capacity(self.selected_modifiers.len());

        for selection in &self.selected_modifiers {
            let group = item.find_modifier(&selection.modifier_id).ok_or_else(|| {
                OrderError::Validation(format!(
                    "Unknown modifier {} for {}",
                    selection.modifier_id, item.id
                ))
            })?;
            if !seen_groups.insert(group.id.as_str()) {
                return Err(OrderError::Validation(format!(
                    "Only one option allowed for {}",
                    group.name
                )));
            }
            let option = group.find_option(&selection.option_label).ok_or_else(|| {
                OrderError::Validation(format!(
                    "Unknown option {} for {}",
                    selection.option_label, group.name
                ))
            })?;
            resolved.push(SelectedModifier {
                modifier_id: group.id.clone(),
                option_label: option.label.clone(),
                price_adjustment: option.price_adjustment,
            });
        }

        Ok(resolved)
    }
}

impl CommandHandler for AddToCartAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;
        let item = chef
            .find_menu_item(&self.menu_item_id)
            .ok_or_else(|| OrderError::MenuItemNotFound(self.menu_item_id.clone()))?;
        let selected_modifiers = self.resolve_modifiers(item)?;
        validate_quantity_change(ctx.cart_quantity(&chef.id, &item.id), 1)?;

        Ok(vec![StoreAction::AddToCart {
            menu_item: item.clone(),
            chef_id: chef.id.clone(),
            is_pre_order: false,
            selected_modifiers,
        }])
    }
}
