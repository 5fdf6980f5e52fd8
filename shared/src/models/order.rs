//! Order Model
//!
//! An order is a snapshot of the cart taken at placement time. After
//! placement only `status` changes.

use super::CartItem;
use serde::{Deserialize, Serialize};

/// Order status
///
/// ```text
/// placed --accept--> accepted --start--> cooking --complete--> ready
///   └──decline──> declined
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Placed,
    Accepted,
    Cooking,
    Ready,
    Declined,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Ready | OrderStatus::Declined)
    }

    /// The single forward successor, if any
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Ready),
            OrderStatus::Ready | OrderStatus::Declined => None,
        }
    }

    /// Forward step, or decline from `Placed`
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        self.next() == Some(target)
            || (self == OrderStatus::Placed && target == OrderStatus::Declined)
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "New Order",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Cooking => "Cooking",
            OrderStatus::Ready => "Ready for Pickup",
            OrderStatus::Declined => "Declined",
        }
    }

    /// Button text for the chef's forward action
    pub fn next_action_label(self) -> Option<&'static str> {
        match self {
            OrderStatus::Placed => Some("Accept"),
            OrderStatus::Accepted => Some("Start Cooking"),
            OrderStatus::Cooking => Some("Mark Ready"),
            OrderStatus::Ready | OrderStatus::Declined => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "placed"),
            OrderStatus::Accepted => write!(f, "accepted"),
            OrderStatus::Cooking => write!(f, "cooking"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Declined => write!(f, "declined"),
        }
    }
}

/// Placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Short display token, e.g. `GKC-7QX2MA`
    pub id: String,
    pub chef_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    /// Pickup window label, e.g. `9 PM – 10 PM`
    pub pickup_slot: String,
    pub status: OrderStatus,
    /// Unix milliseconds
    pub created_at: i64,
}

impl Order {
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_chain() {
        let mut status = OrderStatus::Placed;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                OrderStatus::Placed,
                OrderStatus::Accepted,
                OrderStatus::Cooking,
                OrderStatus::Ready
            ]
        );
        assert!(status.is_terminal());
    }

    #[test]
    fn test_decline_only_from_placed() {
        assert!(OrderStatus::Placed.can_transition_to(OrderStatus::Declined));
        assert!(!OrderStatus::Accepted.can_transition_to(OrderStatus::Declined));
        assert!(!OrderStatus::Cooking.can_transition_to(OrderStatus::Declined));
    }

    #[test]
    fn test_no_transition_out_of_terminal() {
        for target in [
            OrderStatus::Placed,
            OrderStatus::Accepted,
            OrderStatus::Cooking,
            OrderStatus::Ready,
            OrderStatus::Declined,
        ] {
            assert!(!OrderStatus::Ready.can_transition_to(target));
            assert!(!OrderStatus::Declined.can_transition_to(target));
        }
    }

    #[test]
    fn test_no_skipping() {
        assert!(!OrderStatus::Placed.can_transition_to(OrderStatus::Cooking));
        assert!(!OrderStatus::Placed.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Cooking.can_transition_to(OrderStatus::Accepted));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Ready.label(), "Ready for Pickup");
        assert_eq!(OrderStatus::Placed.next_action_label(), Some("Accept"));
        assert_eq!(OrderStatus::Declined.next_action_label(), None);
        assert_eq!(serde_json::to_string(&OrderStatus::Cooking).unwrap(), "\"cooking\"");
    }
}
