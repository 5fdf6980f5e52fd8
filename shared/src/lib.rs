//! Shared types for GharKaChef
//!
//! Domain models, store actions, commands and responses used by the
//! order hub and by every client that renders its state.

pub mod models;
pub mod store;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{CartItem, Chef, MenuItem, Order, OrderStatus, PlannedMeal, PrepWindow, Review};
pub use store::{
    AppState, CommandError, CommandErrorCode, CommandResponse, StoreAction, StoreActionType,
    StoreCommand, StoreCommandPayload,
};
