//! Utility module
//!
//! - [`format`] - price and rating display
//! - [`time`] - pickup slots, drop countdowns, date labels
//! - [`validation`] - text and price limits for command input
//! - [`logger`] - tracing setup

pub mod format;
pub mod logger;
pub mod time;
pub mod validation;

pub use format::{format_average_rating, format_price};
pub use logger::{init_logger, init_logger_with_file};
pub use time::{PickupSlot, drop_countdown, generate_pickup_slots, meal_date_label};
