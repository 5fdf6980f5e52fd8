//! Planned Meal Model
//!
//! Chef-scheduled future meals open for pre-order. A limited drop carries an
//! expiry after which no more pre-orders are taken.

use super::AllergenTag;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealTimeSlot {
    Lunch,
    Dinner,
}

impl MealTimeSlot {
    pub fn label(self) -> &'static str {
        match self {
            MealTimeSlot::Lunch => "Lunch",
            MealTimeSlot::Dinner => "Dinner",
        }
    }
}

/// Planned meal entity
///
/// Invariant: `current_orders <= max_orders` when every pre-order goes
/// through the validated command path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub id: String,
    pub chef_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    pub date: NaiveDate,
    pub time_slot: MealTimeSlot,
    pub max_orders: u32,
    #[serde(default)]
    pub current_orders: u32,
    #[serde(default)]
    pub allergens: BTreeSet<AllergenTag>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_limited_drop: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_expires_at: Option<DateTime<Utc>>,
}

impl PlannedMeal {
    pub fn spots_left(&self) -> u32 {
        self.max_orders.saturating_sub(self.current_orders)
    }

    pub fn is_sold_out(&self) -> bool {
        self.current_orders >= self.max_orders
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.drop_expires_at.is_some_and(|expires| expires <= now)
    }
}

/// Chef input for scheduling a planned meal; id and counters are assigned
/// by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMealInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    pub date: NaiveDate,
    pub time_slot: MealTimeSlot,
    /// Falls back to the configured default when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_orders: Option<u32>,
    #[serde(default)]
    pub allergens: BTreeSet<AllergenTag>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_limited_drop: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meal(max_orders: u32, current_orders: u32) -> PlannedMeal {
        PlannedMeal {
            id: "pm-1".to_string(),
            chef_id: "c1".to_string(),
            name: "Undhiyu".to_string(),
            description: String::new(),
            image: String::new(),
            price: 14.0,
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            time_slot: MealTimeSlot::Lunch,
            max_orders,
            current_orders,
            allergens: BTreeSet::new(),
            is_vegetarian: true,
            is_limited_drop: false,
            drop_expires_at: None,
        }
    }

    #[test]
    fn test_spots_left_never_underflows() {
        assert_eq!(meal(10, 3).spots_left(), 7);
        assert_eq!(meal(1, 2).spots_left(), 0);
    }

    #[test]
    fn test_sold_out() {
        assert!(!meal(2, 1).is_sold_out());
        assert!(meal(1, 1).is_sold_out());
    }

    #[test]
    fn test_drop_expiry() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let mut drop = meal(5, 0);
        assert!(!drop.is_expired_at(now));

        drop.drop_expires_at = Some(now);
        assert!(drop.is_expired_at(now));

        drop.drop_expires_at = Some(Utc.with_ymd_and_hms(2026, 10, 16, 18, 0, 0).unwrap());
        assert!(!drop.is_expired_at(now));
    }

    #[test]
    fn test_time_slot_json() {
        let json = r#""dinner""#;
        let slot: MealTimeSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot, MealTimeSlot::Dinner);
        assert_eq!(slot.label(), "Dinner");
    }
}
