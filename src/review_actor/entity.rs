//! StoredEntity trait implementation for the Review record.

use super::error::ReviewError;
use crate::model::{Review, ReviewCreate, ReviewFilter, ReviewId, ReviewUpdate, RATING_RANGE};
use async_trait::async_trait;
use resource_store::{StoredEntity, Timestamps};

pub(crate) fn check_rating(rating: u8) -> Result<(), ReviewError> {
    if RATING_RANGE.contains(&rating) {
        Ok(())
    } else {
        Err(ReviewError::ValidationError(format!(
            "rating must be between 1 and 5, got {rating}"
        )))
    }
}

#[async_trait]
impl StoredEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = ReviewUpdate;
    type Filter = ReviewFilter;
    type Context = ();
    type Error = ReviewError;

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, Self::Error> {
        check_rating(params.rating)?;
        Ok(Self {
            id,
            product_id: params.product_id,
            user_id: params.user_id,
            rating: params.rating,
            comment: params.comment,
            stamps: Timestamps::default(),
        })
    }

    fn id(&self) -> &ReviewId {
        &self.id
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.stamps
    }

    fn matches(&self, filter: &ReviewFilter) -> bool {
        filter.product_id.map_or(true, |id| self.product_id == id)
            && filter.user_id.map_or(true, |id| self.user_id == id)
    }

    async fn on_update(&mut self, update: ReviewUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(rating) = update.rating {
            check_rating(rating)?;
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = Some(comment);
        }
        Ok(())
    }
}
