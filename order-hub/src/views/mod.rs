//! Read-only projections of `AppState`
//!
//! Nothing here mutates state; every view is rebuilt from a snapshot.

pub mod browse;
pub mod cart;
pub mod chef_mode;
pub mod preorder;

pub use browse::{ChefFilter, cuisines, filter_chefs};
pub use cart::CartSummary;
pub use chef_mode::{ChefDashboard, OrderCard, order_history, orders_for_chef};
pub use preorder::{PreOrderBoard, PreOrderFilter, PreOrderListing};

/// Case-insensitive substring match; an empty query matches everything
pub(crate) fn contains_ci(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(query)
}
