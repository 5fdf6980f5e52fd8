//! Time-based display helpers
//!
//! Pure functions over a supplied "now"; the `*_now` variants read the
//! local clock. Nothing here is scheduled or touches store state.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use shared::models::PrepWindow;

/// Number of pickup windows offered at checkout
pub const PICKUP_SLOT_COUNT: u32 = 3;

/// One-hour pickup window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PickupSlot {
    /// e.g. `9 PM – 10 PM`
    pub label: String,
    /// 0..=23
    pub start_hour: u32,
    /// 0..=23
    pub end_hour: u32,
}

/// Three consecutive one-hour windows starting at the first full hour after
/// `now + prep`. Hours wrap past midnight for display.
pub fn generate_pickup_slots(prep: PrepWindow, now: NaiveTime) -> Vec<PickupSlot> {
    let ready_hour = now.hour() + prep.hours();
    let start_hour = ready_hour + u32::from(now.minute() > 0);

    (0..PICKUP_SLOT_COUNT)
        .map(|i| {
            let start = (start_hour + i) % 24;
            let end = (start_hour + i + 1) % 24;
            PickupSlot {
                label: format!("{} – {}", format_hour(start), format_hour(end)),
                start_hour: start,
                end_hour: end,
            }
        })
        .collect()
}

pub fn generate_pickup_slots_now(prep: PrepWindow) -> Vec<PickupSlot> {
    generate_pickup_slots(prep, Local::now().time())
}

/// 12-hour clock label for a whole hour
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{h} AM"),
        h => format!("{} PM", h - 12),
    }
}

/// Countdown text for a limited drop: `5h 12m left` or `Expired`
pub fn drop_countdown(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires_at - now;
    if remaining.num_milliseconds() <= 0 {
        return "Expired".to_string();
    }
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;
    format!("{hours}h {minutes}m left")
}

/// `Today`, `Tomorrow`, or e.g. `Tue, Oct 20`
pub fn meal_date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.succ_opt() == Some(date) {
        return "Tomorrow".to_string();
    }
    date.format("%a, %b %-d").to_string()
}
