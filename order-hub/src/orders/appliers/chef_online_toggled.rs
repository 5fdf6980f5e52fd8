//! ToggleChefOnline applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// ToggleChefOnline applier
pub struct ChefOnlineToggledApplier;

impl ActionApplier for ChefOnlineToggledApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::ToggleChefOnline { chef_id } = action
            && let Some(chef) = state.find_chef_mut(chef_id)
        {
            chef.is_online = !chef.is_online;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::state;

    #[test]
    fn test_toggle_flips_twice() {
        let mut state = state();
        let action = StoreAction::ToggleChefOnline {
            chef_id: "c1".to_string(),
        };

        ChefOnlineToggledApplier.apply(&mut state, &action);
        assert!(!state.find_chef("c1").unwrap().is_online);
        assert!(state.find_chef("c2").unwrap().is_online);

        ChefOnlineToggledApplier.apply(&mut state, &action);
        assert!(state.find_chef("c1").unwrap().is_online);
    }
}
