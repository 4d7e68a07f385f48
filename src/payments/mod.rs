//! # Payments
//!
//! Payment providers sit behind [`PaymentGateway`]. Without a configured secret the
//! storefront uses [`DevGateway`], which never leaves the process.

pub mod error;
pub mod stripe;

pub use error::PaymentError;
pub use stripe::StripeGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER: &str = "stripe";
pub const DEV_CLIENT_SECRET: &str = "test_secret";

/// Secret the frontend uses to confirm a payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An external payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn provider(&self) -> &'static str;

    /// `amount` is in minor units of `currency`.
    async fn create_payment_intent(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<ClientSecret, PaymentError>;
}

/// Stand-in used when no provider secret is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevGateway;

#[async_trait]
impl PaymentGateway for DevGateway {
    fn provider(&self) -> &'static str {
        DEFAULT_PROVIDER
    }

    async fn create_payment_intent(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<ClientSecret, PaymentError> {
        tracing::debug!(amount, currency, "Dev mode payment intent");
        Ok(ClientSecret::new(DEV_CLIENT_SECRET))
    }
}

fn default_currency() -> String {
    crate::model::DEFAULT_CURRENCY.to_string()
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

/// Either a client secret or a message explaining why there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<ClientSecret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub provider: String,
}

/// Provider callback. Signatures are not verified and orders are not touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub provider: String,
    pub payload: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookAck {
    pub received: bool,
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dev_gateway_returns_fixed_secret() {
        let secret = DevGateway.create_payment_intent(1999, "INR").await.unwrap();
        assert_eq!(secret.as_str(), "test_secret");
    }

    #[test]
    fn test_intent_request_defaults() {
        let req: PaymentIntentRequest = serde_json::from_str(r#"{"amount":1999}"#).unwrap();
        assert_eq!(req.currency, "INR");
        assert_eq!(req.provider, "stripe");
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = PaymentIntentResponse {
            client_secret: Some(ClientSecret::new("test_secret")),
            message: None,
            provider: "stripe".into(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"client_secret": "test_secret", "provider": "stripe"})
        );
    }
}
