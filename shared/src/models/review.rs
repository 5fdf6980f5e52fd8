//! Review Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Customer review of a chef
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub chef_id: String,
    pub customer_name: String,
    /// 1..=5 stars
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub date: NaiveDate,
}
