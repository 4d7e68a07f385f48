use thiserror::Error;

/// Errors raised while talking to a payment provider.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Transport failure or a non-success status from the provider.
    #[error("Payment provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered but the answer was unusable.
    #[error("Payment provider error: {0}")]
    Provider(String),
}
