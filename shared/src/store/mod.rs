//! Store message types
//!
//! This module provides the in-process contract of the order hub:
//! - Actions: state transitions applied by the reducer
//! - Commands: UI intents validated before they become actions
//! - State: the single aggregate every consumer reads
//! - Responses: per-command outcome with error codes

pub mod action;
pub mod command;
pub mod response;
pub mod state;

// Re-exports
pub use action::{StoreAction, StoreActionType};
pub use command::{StoreCommand, StoreCommandPayload};
pub use response::{CommandError, CommandErrorCode, CommandResponse};
pub use state::AppState;
