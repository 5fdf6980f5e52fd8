//! AddReview applier

use crate::orders::traits::ActionApplier;
use shared::store::{AppState, StoreAction};

/// AddReview applier
pub struct ReviewAddedApplier;

impl ActionApplier for ReviewAddedApplier {
    fn apply(&self, state: &mut AppState, action: &StoreAction) {
        if let StoreAction::AddReview { review } = action
            && let Some(chef) = state.find_chef_mut(&review.chef_id)
        {
            chef.reviews.push(review.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fixtures::{meal_date, state};
    use shared::models::Review;

    #[test]
    fn test_review_appended() {
        let mut state = state();
        let action = StoreAction::AddReview {
            review: Review {
                id: "rv-1".to_string(),
                chef_id: "c1".to_string(),
                customer_name: "Meera".to_string(),
                rating: 5,
                comment: "Just like home".to_string(),
                date: meal_date(),
            },
        };

        ReviewAddedApplier.apply(&mut state, &action);

        assert_eq!(state.find_chef("c1").unwrap().reviews.len(), 1);
        assert!(state.find_chef("c2").unwrap().reviews.is_empty());
    }
}
