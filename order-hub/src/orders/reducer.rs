//! Pure state transition
//!
//! `reduce` is total over `StoreAction`: every action yields a full next
//! state, an unknown tag yields the input unchanged. The input is never
//! mutated, so a transition is either applied entirely or not at all.
//!
//! The reducer trusts its caller. It will place an order for an offline
//! chef, move a `ready` order back to `placed` and pre-order a sold-out
//! meal. Validation lives in [`crate::orders::actions`].

use super::appliers;
use shared::store::{AppState, StoreAction};

/// Produce the next state from `state` and `action`
pub fn reduce(state: &AppState, action: &StoreAction) -> AppState {
    let mut next = state.clone();
    apply_action(&mut next, action);
    next
}

/// Apply `action` to a state the caller already owns
pub fn apply_action(state: &mut AppState, action: &StoreAction) {
    appliers::apply(state, action);
}
