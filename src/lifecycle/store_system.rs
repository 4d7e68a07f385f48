use crate::config::StorefrontConfig;
use crate::handlers::{ApiError, Storefront};
use crate::lifecycle::seed::seed_demo_catalog;
use crate::payments::{DevGateway, PaymentError, PaymentGateway, StripeGateway};
use std::sync::Arc;
use tracing::{error, info};

/// Starts, wires and stops the record stores.
///
/// - **User, Product, Review**: no dependencies (`Context = ()`).
/// - **Order**: runs with a `ProductClient` so `on_create` can check line items.
///
/// ```ignore
/// let system = StoreSystem::start(StorefrontConfig::from_env()).await?;
/// let hits = system.storefront.search(SearchQuery::default().text("scarf")).await?;
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub storefront: Storefront,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns every store and builds the [`Storefront`]. The catalog starts empty.
    pub fn new(config: &StorefrontConfig) -> Result<Self, PaymentError> {
        let buffer = config.buffer_size;
        let payments = payment_gateway(config)?;

        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new(buffer);
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (review_actor, review_client) = crate::review_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);

        // 2. Start them, injecting the Order store's product lookup
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(review_actor.run(())),
            tokio::spawn(order_actor.run(product_client.clone())),
        ];

        let storefront = Storefront::new(
            product_client,
            review_client,
            order_client,
            user_client,
            payments,
        );

        Ok(Self {
            storefront,
            handles,
        })
    }

    /// [`new`](Self::new), then seeds the demo catalog if the config asks for it.
    pub async fn start(config: StorefrontConfig) -> Result<Self, ApiError> {
        let system = Self::new(&config)?;
        if config.seed_demo_catalog {
            seed_demo_catalog(system.storefront.products()).await?;
        }
        info!(seeded = config.seed_demo_catalog, "Storefront ready");
        Ok(system)
    }

    /// Drops every client and waits for the stores to drain.
    ///
    /// Clones of the [`Storefront`] held elsewhere keep their stores alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down stores...");
        drop(self.storefront);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

fn payment_gateway(config: &StorefrontConfig) -> Result<Arc<dyn PaymentGateway>, PaymentError> {
    match &config.stripe_secret {
        Some(secret) => {
            info!(api_base = %config.stripe_api_base, "Stripe payments enabled");
            let gateway = StripeGateway::new(config.stripe_api_base.clone(), secret.clone())?;
            Ok(Arc::new(gateway))
        }
        None => {
            info!("No STRIPE_SECRET, payments run in dev mode");
            Ok(Arc::new(DevGateway))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gateway_follows_stripe_secret() {
        let dev = payment_gateway(&StorefrontConfig::default()).unwrap();
        let secret = dev.create_payment_intent(1999, "INR").await.unwrap();
        assert_eq!(secret.as_str(), "test_secret");

        let mut config = StorefrontConfig::default().with_stripe_secret("sk_test");
        config.stripe_api_base = "http://127.0.0.1:9".to_string();
        let stripe = payment_gateway(&config).unwrap();
        let result = stripe.create_payment_intent(1999, "INR").await;
        assert!(matches!(result, Err(PaymentError::Http(_))));
    }
}

