//! Chef-mode command handlers: online toggle, prep window, daily capacity

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::models::PrepWindow;
use shared::store::StoreAction;

/// ToggleChefOnline action
#[derive(Debug, Clone)]
pub struct ToggleChefOnlineAction {
    pub chef_id: String,
}

impl CommandHandler for ToggleChefOnlineAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;
        Ok(vec![StoreAction::ToggleChefOnline {
            chef_id: chef.id.clone(),
        }])
    }
}

/// SetChefPrepWindow action
#[derive(Debug, Clone)]
pub struct SetPrepWindowAction {
    pub chef_id: String,
    pub hours: PrepWindow,
}

impl CommandHandler for SetPrepWindowAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;
        Ok(vec![StoreAction::SetChefPrepWindow {
            chef_id: chef.id.clone(),
            hours: self.hours,
        }])
    }
}

/// How a capacity command changes the chef's daily capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityChange {
    /// Absolute value; negatives clamp to zero
    Set(i32),
    /// Relative to the current capacity, clamped at zero
    Adjust(i32),
}

/// SetChefCapacity / AdjustChefCapacity action
#[derive(Debug, Clone)]
pub struct SetCapacityAction {
    pub chef_id: String,
    pub change: CapacityChange,
}

impl CommandHandler for SetCapacityAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;
        let capacity = match self.change {
            CapacityChange::Set(value) => value.max(0),
            CapacityChange::Adjust(delta) => {
                let current = i64::from(chef.daily_capacity);
                let target = (current + i64::from(delta)).clamp(0, i64::from(i32::MAX));
                i32::try_from(target).unwrap_or(i32::MAX)
            }
        };

        Ok(vec![StoreAction::SetChefCapacity {
            chef_id: chef.id.clone(),
            capacity,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{metadata, now, state};

    #[test]
    fn test_unknown_chef_rejected() {
        let state = state();
        let ctx = CommandContext::new(&state, now());

        let toggle = ToggleChefOnlineAction {
            chef_id: "c9".to_string(),
        };
        assert!(matches!(
            toggle.execute(&ctx, &metadata()),
            Err(OrderError::ChefNotFound(_))
        ));

        let prep = SetPrepWindowAction {
            chef_id: "c9".to_string(),
            hours: PrepWindow::Eight,
        };
        assert!(prep.execute(&ctx, &metadata()).is_err());
    }

    fn capacity_after(change: CapacityChange) -> i32 {
        let state = state();
        let ctx = CommandContext::new(&state, now());
        let action = SetCapacityAction {
            chef_id: "c1".to_string(),
            change,
        };
        match action.execute(&ctx, &metadata()).unwrap().as_slice() {
            [StoreAction::SetChefCapacity { capacity, .. }] => *capacity,
            other => panic!("Expected SetChefCapacity, got {other:?}"),
        }
    }

    #[test]
    fn test_capacity_changes() {
        assert_eq!(capacity_after(CapacityChange::Set(8)), 8);
        assert_eq!(capacity_after(CapacityChange::Set(-1)), 0);
        assert_eq!(capacity_after(CapacityChange::Adjust(1)), 6);
        assert_eq!(capacity_after(CapacityChange::Adjust(-2)), 3);
        assert_eq!(capacity_after(CapacityChange::Adjust(-10)), 0);
    }
}
