//! Stripe payment intents over the REST API.
use super::{ClientSecret, PaymentError, PaymentGateway};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct PaymentIntentBody {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Creates payment intents with a secret API key.
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    api_base: String,
    secret: String,
}

impl StripeGateway {
    pub fn new(
        api_base: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
            secret: secret.into(),
        })
    }

    fn payment_intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    fn provider(&self) -> &'static str {
        "stripe"
    }

    async fn create_payment_intent(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<ClientSecret, PaymentError> {
        let currency = currency.to_lowercase();
        debug!(amount, %currency, "Creating payment intent");
        let amount = amount.to_string();
        let response = self
            .client
            .post(self.payment_intents_url())
            .bearer_auth(&self.secret)
            .form(&[("amount", amount.as_str()), ("currency", currency.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(PaymentError::Provider(format!("{status}: {message}")));
        }

        let intent: PaymentIntentBody = response.json().await?;
        info!(intent_id = %intent.id, "Payment intent created");
        intent
            .client_secret
            .map(ClientSecret::new)
            .ok_or_else(|| PaymentError::Provider(format!("intent {} has no client_secret", intent.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let gateway = StripeGateway::new("http://localhost:12111/", "sk_test").unwrap();
        assert_eq!(
            gateway.payment_intents_url(),
            "http://localhost:12111/v1/payment_intents"
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let gateway = StripeGateway::new(DEFAULT_API_BASE, "sk_live_do_not_print").unwrap();
        let printed = format!("{gateway:?}");
        assert!(!printed.contains("sk_live"));
    }

    #[test]
    fn test_error_body_parses() {
        let body = r#"{"error":{"message":"Invalid currency: xyz","type":"invalid_request_error"}}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Invalid currency: xyz");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_error() {
        let gateway = StripeGateway::new("http://127.0.0.1:9", "sk_test").unwrap();
        let result = gateway.create_payment_intent(1999, "INR").await;
        assert!(matches!(result, Err(PaymentError::Http(_))));
    }
}
