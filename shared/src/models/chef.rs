//! Chef Model

use super::{MenuItem, PlannedMeal, Review};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kitchen certifications displayed on the chef card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VerifiedBadge {
    #[serde(rename = "Health Permit")]
    HealthPermit,
    #[serde(rename = "Inspected Kitchen")]
    InspectedKitchen,
    #[serde(rename = "Food Handler")]
    FoodHandler,
}

impl VerifiedBadge {
    pub const ALL: [VerifiedBadge; 3] = [
        VerifiedBadge::HealthPermit,
        VerifiedBadge::InspectedKitchen,
        VerifiedBadge::FoodHandler,
    ];
}

/// Hours a chef needs before an order can be picked up
///
/// Serialized as the plain number of hours (4 or 8).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum PrepWindow {
    #[default]
    Four,
    Eight,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("prep window must be 4 or 8 hours, got {0}")]
pub struct InvalidPrepWindow(pub u8);

impl PrepWindow {
    pub fn hours(self) -> u32 {
        match self {
            PrepWindow::Four => 4,
            PrepWindow::Eight => 8,
        }
    }
}

impl TryFrom<u8> for PrepWindow {
    type Error = InvalidPrepWindow;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(PrepWindow::Four),
            8 => Ok(PrepWindow::Eight),
            other => Err(InvalidPrepWindow(other)),
        }
    }
}

impl From<PrepWindow> for u8 {
    fn from(value: PrepWindow) -> Self {
        match value {
            PrepWindow::Four => 4,
            PrepWindow::Eight => 8,
        }
    }
}

impl std::fmt::Display for PrepWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

/// Recurring weekly subscription offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub meals_per_week: u32,
    pub price_per_meal: f64,
    pub description: String,
    #[serde(default)]
    pub dietary_options: Vec<String>,
}

/// Chef entity
///
/// Display attributes are read-only seed data. Only the operational fields
/// (`is_online`, `default_prep_window_hours`, `daily_capacity`) and the
/// collections (`reviews`, `planned_meals`) change at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub distance_km: f64,
    /// 1..=3
    pub price_level: u8,
    #[serde(default)]
    pub verified_badges: Vec<VerifiedBadge>,
    pub is_online: bool,
    pub default_prep_window_hours: PrepWindow,
    /// Orders the chef can still accept today
    pub daily_capacity: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub planned_meals: Vec<PlannedMeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_plan: Option<WeeklyPlan>,
}

impl Chef {
    pub fn find_menu_item(&self, menu_item_id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|m| m.id == menu_item_id)
    }

    pub fn find_planned_meal(&self, meal_id: &str) -> Option<&PlannedMeal> {
        self.planned_meals.iter().find(|m| m.id == meal_id)
    }

    pub fn has_capacity(&self) -> bool {
        self.daily_capacity > 0
    }

    /// Holds every verified badge
    pub fn is_fully_verified(&self) -> bool {
        VerifiedBadge::ALL
            .iter()
            .all(|b| self.verified_badges.contains(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_window_serializes_as_hours() {
        assert_eq!(serde_json::to_string(&PrepWindow::Eight).unwrap(), "8");
        let parsed: PrepWindow = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, PrepWindow::Four);
    }

    #[test]
    fn test_prep_window_rejects_other_values() {
        assert!(serde_json::from_str::<PrepWindow>("6").is_err());
        assert_eq!(PrepWindow::try_from(6), Err(InvalidPrepWindow(6)));
    }

    #[test]
    fn test_verified_badge_names() {
        let json = serde_json::to_string(&VerifiedBadge::InspectedKitchen).unwrap();
        assert_eq!(json, "\"Inspected Kitchen\"");
    }

    #[test]
    fn test_chef_from_minimal_json() {
        let json = r#"{
            "id": "c1",
            "name": "Asha",
            "cuisine": "Gujarati",
            "rating": 4.8,
            "distanceKm": 1.2,
            "priceLevel": 2,
            "isOnline": true,
            "defaultPrepWindowHours": 8,
            "dailyCapacity": 5
        }"#;
        let chef: Chef = serde_json::from_str(json).unwrap();

        assert_eq!(chef.default_prep_window_hours, PrepWindow::Eight);
        assert!(chef.has_capacity());
        assert!(chef.menu_items.is_empty());
        assert!(chef.weekly_plan.is_none());
        assert!(!chef.is_fully_verified());
    }
}
