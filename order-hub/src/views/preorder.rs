//! Pre-order board: planned meals across every chef, plus weekly plans

use super::contains_ci;
use crate::utils::format::format_price;
use crate::utils::time::{drop_countdown, meal_date_label};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{Chef, PlannedMeal, WeeklyPlan};
use shared::store::AppState;

/// Search and cuisine filter shared by all board sections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreOrderFilter {
    /// Matched against meal name, cuisine and chef name
    pub search: String,
    pub cuisine: Option<String>,
}

impl PreOrderFilter {
    fn matches(&self, name: &str, cuisine: &str, chef_name: Option<&str>) -> bool {
        let query = self.search.trim().to_lowercase();
        let hit = contains_ci(name, &query)
            || contains_ci(cuisine, &query)
            || chef_name.is_some_and(|n| contains_ci(n, &query));
        if !hit {
            return false;
        }
        self.cuisine.as_deref().is_none_or(|c| c == cuisine)
    }
}

/// A planned meal with its chef's display details
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreOrderListing {
    pub meal: PlannedMeal,
    pub chef_name: String,
    pub chef_cuisine: String,
    pub spots_left: u32,
    pub sold_out: bool,
    pub display_price: String,
    pub date_label: String,
    /// Only for limited drops with an expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<String>,
}

impl PreOrderListing {
    fn new(chef: &Chef, meal: &PlannedMeal, now: DateTime<Utc>) -> Self {
        Self {
            meal: meal.clone(),
            chef_name: chef.name.clone(),
            chef_cuisine: chef.cuisine.clone(),
            spots_left: meal.spots_left(),
            sold_out: meal.is_sold_out(),
            display_price: format_price(meal.price),
            date_label: meal_date_label(meal.date, now.date_naive()),
            countdown: meal
                .drop_expires_at
                .filter(|_| meal.is_limited_drop)
                .map(|expires| drop_countdown(expires, now)),
        }
    }
}

/// Chef offering a weekly subscription
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlanListing {
    pub chef_id: String,
    pub chef_name: String,
    pub cuisine: String,
    pub plan: WeeklyPlan,
    pub display_price: String,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreOrderBoard {
    pub limited_drops: Vec<PreOrderListing>,
    pub upcoming: Vec<PreOrderListing>,
    pub weekly_plans: Vec<WeeklyPlanListing>,
}

impl PreOrderBoard {
    /// Meals are sorted by date; ties keep chef order.
    pub fn build(state: &AppState, filter: &PreOrderFilter, now: DateTime<Utc>) -> Self {
        let mut listings: Vec<PreOrderListing> = state
            .chefs
            .iter()
            .flat_map(|chef| {
                chef.planned_meals
                    .iter()
                    .map(move |meal| PreOrderListing::new(chef, meal, now))
            })
            .filter(|l| filter.matches(&l.meal.name, &l.chef_cuisine, Some(&l.chef_name)))
            .collect();
        listings.sort_by_key(|l| l.meal.date);

        let (limited_drops, upcoming) = listings
            .into_iter()
            .partition(|l| l.meal.is_limited_drop);

        let weekly_plans = state
            .chefs
            .iter()
            .filter(|c| filter.matches(&c.name, &c.cuisine, None))
            .filter_map(|c| {
                c.weekly_plan.as_ref().map(|plan| WeeklyPlanListing {
                    chef_id: c.id.clone(),
                    chef_name: c.name.clone(),
                    cuisine: c.cuisine.clone(),
                    plan: plan.clone(),
                    display_price: format_price(plan.price_per_meal),
                })
            })
            .collect();

        Self {
            limited_drops,
            upcoming,
            weekly_plans,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.limited_drops.is_empty() && self.upcoming.is_empty() && self.weekly_plans.is_empty()
    }
}
