//! Shape checks applied to request payloads before they reach a store.
use super::ApiError;
use crate::model::{OrderCreate, ProductCreate, ProductUpdate, ReviewCreate};
use crate::order_actor::entity::check_items;
use crate::product_actor::entity::check_price;
use crate::review_actor::entity::check_rating;

pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

impl Validate for ProductCreate {
    fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("title must not be empty".to_string()));
        }
        Ok(check_price(self.price)?)
    }
}

impl Validate for ProductUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        match self.price {
            Some(price) => Ok(check_price(price)?),
            None => Ok(()),
        }
    }
}

impl Validate for ReviewCreate {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(check_rating(self.rating)?)
    }
}

impl Validate for OrderCreate {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(check_items(&self.items)?)
    }
}
