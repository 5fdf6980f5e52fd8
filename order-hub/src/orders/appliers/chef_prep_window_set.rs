//! SetChefPrepWindow applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// SetChefPrepWindow applier
pub struct ChefPrepWindowSetApplier;

impl ActionApplier for ChefPrepWindowSetApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::SetChefPrepWindow { chef_id, hours } = action
            && let Some(chef) = state.find_chef_mut(chef_id)
        {
            chef.default_prep_window_hours = *hours;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::state;
    use shared::models::PrepWindow;

    #[test]
    fn test_set_prep_window() {
        let mut state = state();
        let action = StoreAction::SetChefPrepWindow {
            chef_id: "c1".to_string(),
            hours: PrepWindow::Eight,
        };

        ChefPrepWindowSetApplier.apply(&mut state, &action);

        assert_eq!(
            state.find_chef("c1").unwrap().default_prep_window_hours,
            PrepWindow::Eight
        );
    }
}
