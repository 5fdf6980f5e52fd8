//! Order & cart store
//!
//! - **traits**: command handler / action applier traits and `OrderError`
//! - **actions**: one command handler per UI intent, validating before anything mutates
//! - **appliers**: one applier per `StoreAction`, the lenient transition rules
//! - **reducer**: `reduce(&AppState, &StoreAction) -> AppState`
//! - **manager**: `StoreManager`, the single writer that owns the state
//! - **money**: decimal arithmetic for cart and order totals
//!
//! # Architecture
//!
//! ```text
//! StoreCommand → StoreManager → CommandAction (validate) → Vec<StoreAction>
//!                     ↓                                          ↓
//!                 Broadcast  ←──────── reducer (ApplierAction) ──┘
//!                     ↓
//!              All Subscribers (Arc<AppState>)
//! ```
//!
//! # Data Flow
//!
//! 1. UI sends a `StoreCommand`
//! 2. The manager rejects repeated command ids
//! 3. The command handler checks business rules against the current state
//! 4. Emitted actions are applied to a copy of the state, each bumping the sequence
//! 5. The new state replaces the old one and is broadcast to subscribers
//! 6. `CommandResponse` is returned to the caller
//!
//! `StoreManager::dispatch` skips step 3 and applies a raw action, which is
//! the documented lenient contract of the reducer.

pub mod traits;

pub mod actions;
pub mod appliers;
pub mod manager;
pub mod money;
pub mod reducer;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports
pub use manager::{ManagerError, ManagerResult, StateUpdate, StoreManager};
pub use reducer::{apply_action, reduce};
pub use traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};

// Re-export shared types for convenience
pub use shared::store::{
    AppState, CommandError, CommandErrorCode, CommandResponse, StoreAction, StoreActionType,
    StoreCommand, StoreCommandPayload,
};
