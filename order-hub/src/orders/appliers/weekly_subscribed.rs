//! SubscribeWeekly and unknown-action appliers
//!
//! Both leave the state unchanged.

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// SubscribeWeekly applier (acknowledged only)
pub struct WeeklySubscribedApplier;

impl ActionApplier for WeeklySubscribedApplier {
    fn apply(&self, _state: &mut AppState, _action: &StoreAction) {}
}

/// Applier for action tags this build does not know
pub struct IgnoredApplier;

impl ActionApplier for IgnoredApplier {
    fn apply(&self, _state: &mut AppState, _action: &StoreAction) {}
}
