use crate::model::{ProductId, ReviewId, UserId};
use resource_store::Timestamps;
use serde::{Deserialize, Serialize};

/// Lowest and highest accepted star rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A customer's review of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: u8,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub stamps: Timestamps,
}

/// Payload for posting a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Changes to a review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewFilter {
    pub product_id: Option<ProductId>,
    pub user_id: Option<UserId>,
}

impl ReviewFilter {
    pub fn by_product(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            user_id: None,
        }
    }
}
