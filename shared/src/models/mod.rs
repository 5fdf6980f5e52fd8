//! Data models
//!
//! Shared between the order hub and any client rendering its state.
//! Field names serialize as camelCase to match the app's data shape.

pub mod cart;
pub mod chef;
pub mod menu;
pub mod order;
pub mod planned_meal;
pub mod review;

// Re-exports
pub use cart::*;
pub use chef::*;
pub use menu::*;
pub use order::*;
pub use planned_meal::*;
pub use review::*;
