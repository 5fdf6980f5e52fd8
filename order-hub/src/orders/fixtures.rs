//! Test fixtures shared by the applier, action and manager tests

use chrono::NaiveDate;
use shared::models::{
    AllergenTag, CartItem, Chef, MealTimeSlot, MenuItem, MenuModifier, ModifierOption, Order,
    OrderStatus, PlannedMeal, PrepWindow, VerifiedBadge, WeeklyPlan,
};
use shared::store::AppState;
use std::collections::BTreeSet;

pub fn menu_item(id: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: format!("Dish {id}"),
        price,
        description: String::new(),
        allergens: BTreeSet::new(),
        is_veg: true,
        modifiers: vec![],
    }
}

/// `m-spice` with a "Spice level" group (Mild +0, Extra hot +0.5) and a
/// "Portion" group (Regular +0, Large +2)
pub fn menu_item_with_modifiers() -> MenuItem {
    let mut item = menu_item("m-spice", 10.0);
    item.allergens = BTreeSet::from([AllergenTag::Dairy]);
    item.modifiers = vec![
        MenuModifier {
            id: "spice".to_string(),
            name: "Spice level".to_string(),
            options: vec![
                ModifierOption {
                    label: "Mild".to_string(),
                    price_adjustment: 0.0,
                },
                ModifierOption {
                    label: "Extra hot".to_string(),
                    price_adjustment: 0.5,
                },
            ],
        },
        MenuModifier {
            id: "portion".to_string(),
            name: "Portion".to_string(),
            options: vec![
                ModifierOption {
                    label: "Regular".to_string(),
                    price_adjustment: 0.0,
                },
                ModifierOption {
                    label: "Large".to_string(),
                    price_adjustment: 2.0,
                },
            ],
        },
    ];
    item
}

pub fn meal_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).unwrap_or_default()
}

pub fn planned_meal(id: &str, chef_id: &str, max_orders: u32, current_orders: u32) -> PlannedMeal {
    PlannedMeal {
        id: id.to_string(),
        chef_id: chef_id.to_string(),
        name: "Undhiyu".to_string(),
        description: "Winter vegetable casserole".to_string(),
        image: String::new(),
        price: 14.0,
        date: meal_date(),
        time_slot: MealTimeSlot::Dinner,
        max_orders,
        current_orders,
        allergens: BTreeSet::new(),
        is_vegetarian: true,
        is_limited_drop: false,
        drop_expires_at: None,
    }
}

/// Online chef with capacity 5 and menu items `m1` ($5), `m2` ($3) and
/// `m-spice` ($10, with modifiers)
pub fn chef(id: &str) -> Chef {
    Chef {
        id: id.to_string(),
        name: format!("Chef {id}"),
        cuisine: "Gujarati".to_string(),
        rating: 4.8,
        distance_km: 1.2,
        price_level: 2,
        verified_badges: VerifiedBadge::ALL.to_vec(),
        is_online: true,
        default_prep_window_hours: PrepWindow::Four,
        daily_capacity: 5,
        image_url: String::new(),
        menu_items: vec![
            menu_item("m1", 5.0),
            menu_item("m2", 3.0),
            menu_item_with_modifiers(),
        ],
        reviews: vec![],
        planned_meals: vec![planned_meal("pm-1", id, 10, 0)],
        weekly_plan: Some(WeeklyPlan {
            meals_per_week: 5,
            price_per_meal: 11.0,
            description: "Weekday dinners".to_string(),
            dietary_options: vec!["Vegetarian".to_string()],
        }),
    }
}

/// Chefs `c1` and `c2`
pub fn state() -> AppState {
    AppState::with_chefs(vec![chef("c1"), chef("c2")])
}

pub fn cart_item(menu_item: MenuItem, chef_id: &str, quantity: i32) -> CartItem {
    let mut entry = CartItem::new(menu_item, chef_id);
    entry.quantity = quantity;
    entry
}

pub fn order(id: &str, chef_id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        chef_id: chef_id.to_string(),
        customer_name: "Ravi".to_string(),
        customer_phone: "555-0101".to_string(),
        items: vec![cart_item(menu_item("m1", 5.0), chef_id, 1)],
        total: 5.0,
        pickup_slot: "6 PM – 7 PM".to_string(),
        status,
        created_at: 1_700_000_000_000,
    }
}

/// Fixed clock for handler tests: 2026-10-16 12:00 UTC
pub fn now() -> chrono::DateTime<chrono::Utc> {
    use chrono::TimeZone;
    chrono::Utc
        .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn metadata() -> crate::orders::traits::CommandMetadata {
    crate::orders::traits::CommandMetadata {
        command_id: "cmd-1".to_string(),
        timestamp: 1_700_000_000_000,
    }
}
