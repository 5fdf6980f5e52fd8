//! Chef-mode projections: incoming orders, history, dashboard

use crate::utils::format::{format_average_rating, format_price};
use serde::Serialize;
use shared::models::{Chef, Order, OrderStatus, PlannedMeal};
use shared::store::AppState;

/// Orders placed with one chef, in placement order
pub fn orders_for_chef<'a>(state: &'a AppState, chef_id: &str) -> Vec<&'a Order> {
    state.orders.iter().filter(|o| o.chef_id == chef_id).collect()
}

/// All orders, newest first
pub fn order_history(state: &AppState) -> Vec<&Order> {
    state.orders.iter().rev().collect()
}

/// One order as a chef sees it
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub order_id: String,
    pub customer_name: String,
    pub pickup_slot: String,
    pub item_count: i64,
    pub display_total: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    /// Forward button text, `None` once the order is done
    pub next_action: Option<&'static str>,
    /// Decline is offered only for new orders
    pub can_decline: bool,
}

impl From<&Order> for OrderCard {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            pickup_slot: order.pickup_slot.clone(),
            item_count: order.item_count(),
            display_total: format_price(order.total),
            status: order.status,
            status_label: order.status.label(),
            next_action: order.status.next_action_label(),
            can_decline: order.status.can_transition_to(OrderStatus::Declined),
        }
    }
}

/// Everything the chef-mode screen shows for one chef
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefDashboard {
    pub chef_id: String,
    pub is_online: bool,
    pub prep_window_hours: u32,
    pub daily_capacity: u32,
    pub average_rating: String,
    pub review_count: usize,
    pub orders: Vec<OrderCard>,
    pub planned_meals: Vec<PlannedMeal>,
}

impl ChefDashboard {
    pub fn build(state: &AppState, chef: &Chef) -> Self {
        Self {
            chef_id: chef.id.clone(),
            is_online: chef.is_online,
            prep_window_hours: chef.default_prep_window_hours.hours(),
            daily_capacity: chef.daily_capacity,
            average_rating: format_average_rating(&chef.reviews),
            review_count: chef.reviews.len(),
            orders: orders_for_chef(state, &chef.id)
                .into_iter()
                .map(OrderCard::from)
                .collect(),
            planned_meals: chef.planned_meals.clone(),
        }
    }

    /// Orders still waiting on the chef
    pub fn open_orders(&self) -> impl Iterator<Item = &OrderCard> {
        self.orders.iter().filter(|o| !o.status.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{order, state};

    fn state_with_orders() -> AppState {
        let mut state = state();
        state.orders = vec![
            order("GKC-000001", "c1", OrderStatus::Placed),
            order("GKC-000002", "c2", OrderStatus::Cooking),
            order("GKC-000003", "c1", OrderStatus::Ready),
        ];
        state
    }

    #[test]
    fn test_orders_for_chef() {
        let state = state_with_orders();
        let ids: Vec<&str> = orders_for_chef(&state, "c1")
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["GKC-000001", "GKC-000003"]);
    }

    #[test]
    fn test_history_newest_first() {
        let state = state_with_orders();
        let ids: Vec<&str> = order_history(&state).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["GKC-000003", "GKC-000002", "GKC-000001"]);
    }

    #[test]
    fn test_order_card_labels() {
        let new_order = OrderCard::from(&order("GKC-000001", "c1", OrderStatus::Placed));
        assert_eq!(new_order.status_label, "New Order");
        assert_eq!(new_order.next_action, Some("Accept"));
        assert!(new_order.can_decline);
        assert_eq!(new_order.display_total, "$5.00");

        let ready = OrderCard::from(&order("GKC-000002", "c1", OrderStatus::Ready));
        assert_eq!(ready.status_label, "Ready for Pickup");
        assert_eq!(ready.next_action, None);
        assert!(!ready.can_decline);
    }

    #[test]
    fn test_dashboard() {
        let state = state_with_orders();
        let chef = state.find_chef("c1").unwrap();
        let dashboard = ChefDashboard::build(&state, chef);

        assert_eq!(dashboard.orders.len(), 2);
        assert_eq!(dashboard.open_orders().count(), 1);
        assert_eq!(dashboard.average_rating, "0");
        assert_eq!(dashboard.prep_window_hours, 4);
    }
}
