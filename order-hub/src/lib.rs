//! GharKaChef order hub
//!
//! Single-writer store for the cart, orders and chef operations of a
//! home-cooked food marketplace.
//!
//! # Module layout
//!
//! ```text
//! order-hub/src/
//! ├── core/      # Configuration
//! ├── orders/    # Reducer, command handlers, StoreManager
//! ├── seed/      # Initial chef dataset
//! ├── views/     # Read-only projections (browse, cart, pre-orders, chef mode)
//! └── utils/     # Formatting, time helpers, validation, logging
//! ```

pub mod core;
pub mod orders;
pub mod seed;
pub mod utils;
pub mod views;

// Re-export public types
pub use core::Config;
pub use orders::{
    ManagerError, ManagerResult, OrderError, StateUpdate, StoreManager, apply_action, reduce,
};
pub use seed::SeedError;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Banner goes to stderr; stdout carries command responses
pub fn print_banner() {
    eprintln!(
        r#"
   ____ _                _  __      ____ _           __
  / ___| |__   __ _ _ __| |/ /__ _ / ___| |__   ___ / _|
 | |  _| '_ \ / _` | '__| ' // _` | |   | '_ \ / _ \ |_
 | |_| | | | | (_| | |  | . \ (_| | |___| | | |  __/  _|
  \____|_| |_|\__,_|_|  |_|\_\__,_|\____|_| |_|\___|_|
                  order hub v{}
    "#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
