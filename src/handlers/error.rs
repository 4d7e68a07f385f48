//! Boundary errors returned by [`Storefront`](super::Storefront).
use crate::order_actor::OrderError;
use crate::payments::PaymentError;
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;
use crate::user_actor::UserError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// A lookup by id found nothing. The message is client-facing.
    #[error("{0}")]
    NotFound(String),

    /// The request was rejected before it reached a store.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A payment provider failed.
    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-equivalent status for the error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 422,
            Self::Upstream(_) => 502,
            Self::Internal(_) => 500,
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => Self::NotFound("Product not found".to_string()),
            ProductError::ValidationError(msg) => Self::Validation(msg),
            ProductError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(e: ReviewError) -> Self {
        match e {
            ReviewError::ValidationError(msg) => Self::Validation(msg),
            ReviewError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => Self::NotFound("Order not found".to_string()),
            OrderError::InvalidProduct(id) => Self::Validation(format!("unknown product {id}")),
            OrderError::ValidationError(msg) => Self::Validation(msg),
            OrderError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => Self::NotFound("User not found".to_string()),
            UserError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(e: PaymentError) -> Self {
        Self::Upstream(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound("x".into()).status_code(), 404);
        assert_eq!(ApiError::Validation("x".into()).status_code(), 422);
        assert_eq!(ApiError::Upstream("x".into()).status_code(), 502);
        assert_eq!(ApiError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_not_found_messages_are_client_facing() {
        let e: ApiError = ProductError::NotFound("product_9".into()).into();
        assert_eq!(e.to_string(), "Product not found");
        let e: ApiError = OrderError::NotFound("order_9".into()).into();
        assert_eq!(e.to_string(), "Order not found");
    }

    #[test]
    fn test_invalid_product_is_a_validation_failure() {
        let e: ApiError = OrderError::InvalidProduct("product_77".into()).into();
        assert_eq!(e, ApiError::Validation("unknown product product_77".into()));
    }
}
