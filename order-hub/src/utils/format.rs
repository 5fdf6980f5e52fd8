//! Display formatting for prices and ratings

use crate::orders::money::{to_decimal, to_f64};
use shared::models::Review;

/// `$13.00`
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", to_f64(to_decimal(amount)))
}

/// Mean review rating with one decimal, `"0"` when there are no reviews
pub fn format_average_rating(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "0".to_string();
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let avg = f64::from(sum) / reviews.len() as f64;
    format!("{avg:.1}")
}
