//! AddReview command handler

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_text_len};
use shared::models::{MAX_RATING, MIN_RATING, Review};
use shared::store::StoreAction;
use shared::util::prefixed_id;

/// AddReview action
#[derive(Debug, Clone)]
pub struct AddReviewAction {
    pub chef_id: String,
    pub customer_name: String,
    pub rating: u8,
    pub comment: String,
}

impl CommandHandler for AddReviewAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _metadata: &CommandMetadata,
    ) -> Result<Vec<StoreAction>, OrderError> {
        let chef = ctx.chef(&self.chef_id)?;

        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(OrderError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                self.rating
            )));
        }

        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(OrderError::CustomerNameRequired);
        }
        validate_text_len(customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_text_len(&self.comment, "comment", MAX_NOTE_LEN)?;

        let review = Review {
            id: prefixed_id("rv"),
            chef_id: chef.id.clone(),
            customer_name: customer_name.to_string(),
            rating: self.rating,
            comment: self.comment.trim().to_string(),
            date: ctx.now.date_naive(),
        };

        Ok(vec![StoreAction::AddReview { review }])
    }
}
