//! Command responses and error codes

use serde::{Deserialize, Serialize};

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// State sequence after the command was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    /// New order ID (only for PlaceOrder)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, sequence: u64, order_id: Option<String>) -> Self {
        Self {
            command_id,
            success: true,
            sequence: Some(sequence),
            order_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            sequence: None,
            order_id: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            sequence: None,
            order_id: None,
            error: None,
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
///
/// The UI maps each code to a blocking notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    // Checkout
    CartEmpty,
    CustomerNameRequired,
    CustomerPhoneRequired,
    ChefOffline,
    CapacityFull,

    // Pre-orders
    MealSoldOut,
    DropExpired,
    NoWeeklyPlan,

    // Lookups
    ChefNotFound,
    MenuItemNotFound,
    CartItemNotFound,
    MealNotFound,
    OrderNotFound,

    // Order lifecycle
    InvalidTransition,

    ValidationFailed,
    InvalidCommand,
    InternalError,
}
