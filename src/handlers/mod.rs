//! # Request Handlers
//!
//! [`Storefront`] is the application surface. It holds the store clients, the payment
//! gateway and the relevance scorer, turns request payloads into store and search calls,
//! and reports failures as [`ApiError`]. There is no transport here; an HTTP layer would
//! call these methods and use [`ApiError::status_code`].

pub mod error;
pub mod validate;

pub use error::ApiError;
pub use validate::Validate;

use crate::clients::{OrderClient, ProductClient, ReviewClient, UserClient};
use crate::model::{
    Order, OrderCreate, OrderId, Product, ProductCreate, ProductFilter, ProductId, ProductUpdate,
    Review, ReviewCreate, User, UserCreate, DEFAULT_PROVIDER as DEFAULT_AUTH_PROVIDER,
};
use crate::payments::{
    PaymentGateway, PaymentIntentRequest, PaymentIntentResponse, WebhookAck, WebhookEvent,
};
use crate::search::{self, KeywordScorer, RecommendationRequest, RelevanceScorer, SearchQuery};
use resource_store::StoreClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const ROOT_MESSAGE: &str = "BlessedBuy API running";
pub const PROVIDER_NOT_IMPLEMENTED: &str = "Provider not implemented";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

fn default_auth_provider() -> String {
    DEFAULT_AUTH_PROVIDER.to_string()
}

/// Login stub payload. There are no credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_auth_provider")]
    pub provider: String,
}

impl Default for AuthRequest {
    fn default() -> Self {
        Self {
            email: None,
            name: None,
            phone: None,
            provider: default_auth_provider(),
        }
    }
}

#[derive(Clone)]
pub struct Storefront {
    products: ProductClient,
    reviews: ReviewClient,
    orders: OrderClient,
    users: UserClient,
    payments: Arc<dyn PaymentGateway>,
    scorer: Arc<dyn RelevanceScorer>,
}

impl Storefront {
    pub fn new(
        products: ProductClient,
        reviews: ReviewClient,
        orders: OrderClient,
        users: UserClient,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            products,
            reviews,
            orders,
            users,
            payments,
            scorer: Arc::new(KeywordScorer),
        }
    }

    /// Replaces the recommendation strategy.
    pub fn with_scorer(mut self, scorer: Arc<dyn RelevanceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn products(&self) -> &ProductClient {
        &self.products
    }

    pub fn root(&self) -> StatusMessage {
        StatusMessage {
            message: ROOT_MESSAGE.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ApiError> {
        params.validate()?;
        let product = self.products.create_product(params).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// All products, or the exact-category subset. An empty category means all.
    pub async fn list_products(&self, category: Option<String>) -> Result<Vec<Product>, ApiError> {
        let category = category.filter(|c| !c.is_empty());
        Ok(self.products.list_products(category).await?)
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        Ok(self.products.get_product(id).await?)
    }

    /// Applies `update` to the first product matching `filter`. Returns 0 or 1.
    #[instrument(skip(self))]
    pub async fn update_products(
        &self,
        filter: ProductFilter,
        update: ProductUpdate,
    ) -> Result<usize, ApiError> {
        update.validate()?;
        Ok(self.products.update_where(filter, update).await?)
    }

    /// Removes the first product matching `filter`. Returns 0 or 1.
    #[instrument(skip(self))]
    pub async fn delete_products(&self, filter: ProductFilter) -> Result<usize, ApiError> {
        Ok(self.products.delete_where(filter).await?)
    }

    // -------------------------------------------------------------------------
    // Reviews
    // -------------------------------------------------------------------------

    #[instrument(skip(self, params), fields(product_id = %params.product_id))]
    pub async fn create_review(&self, params: ReviewCreate) -> Result<Review, ApiError> {
        params.validate()?;
        Ok(self.reviews.create_review(params).await?)
    }

    pub async fn list_reviews(&self, product_id: ProductId) -> Result<Vec<Review>, ApiError> {
        Ok(self.reviews.list_reviews(product_id).await?)
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, ApiError> {
        params.validate()?;
        let order = self.orders.create_order(params).await?;
        info!(order_id = %order.id, amount = order.amount, "Order placed");
        Ok(order)
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        Ok(self.orders.get_order(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: String,
    ) -> Result<Order, ApiError> {
        if status.trim().is_empty() {
            return Err(ApiError::Validation("status must not be empty".to_string()));
        }
        Ok(self.orders.update_status(id, status).await?)
    }

    // -------------------------------------------------------------------------
    // Search & recommendations
    // -------------------------------------------------------------------------

    /// Filters then sorts the current catalog snapshot.
    #[instrument(skip(self))]
    pub async fn search(&self, query: SearchQuery) -> Result<Vec<Product>, ApiError> {
        let catalog = self.products.catalog().await?;
        let results = search::search(&catalog, &query);
        debug!(catalog = catalog.len(), results = results.len(), "Search done");
        Ok(results)
    }

    #[instrument(skip(self))]
    pub async fn recommend(&self, req: RecommendationRequest) -> Result<Vec<Product>, ApiError> {
        let catalog = self.products.catalog().await?;
        let keywords = req.keywords();
        let ranked = search::recommend(&catalog, &keywords, self.scorer.as_ref());
        debug!(keywords = keywords.len(), results = ranked.len(), "Recommendations ranked");
        Ok(ranked)
    }

    // -------------------------------------------------------------------------
    // Payments
    // -------------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn create_payment_intent(
        &self,
        req: PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, ApiError> {
        if req.provider != self.payments.provider() {
            warn!(provider = %req.provider, "Unsupported payment provider");
            return Ok(PaymentIntentResponse {
                client_secret: None,
                message: Some(PROVIDER_NOT_IMPLEMENTED.to_string()),
                provider: req.provider,
            });
        }
        let secret = self
            .payments
            .create_payment_intent(req.amount, &req.currency)
            .await?;
        Ok(PaymentIntentResponse {
            client_secret: Some(secret),
            message: None,
            provider: req.provider,
        })
    }

    /// Acknowledges a provider callback. The payload is logged, not acted on.
    pub fn payment_webhook(&self, event: WebhookEvent) -> WebhookAck {
        info!(provider = %event.provider, fields = event.payload.len(), "Webhook received");
        WebhookAck {
            received: true,
            provider: event.provider,
        }
    }

    // -------------------------------------------------------------------------
    // Auth stub
    // -------------------------------------------------------------------------

    /// Returns the user registered with the same email, or registers a new one.
    #[instrument(skip(self, req), fields(provider = %req.provider))]
    pub async fn login(&self, req: AuthRequest) -> Result<User, ApiError> {
        if let Some(email) = req.email.as_deref().filter(|e| !e.is_empty()) {
            if let Some(user) = self.users.find_by_email(email).await? {
                debug!(user_id = %user.id, "Existing user");
                return Ok(user);
            }
        }
        let user = self
            .users
            .create_user(UserCreate {
                email: req.email,
                name: req.name,
                phone: req.phone,
                photo_url: None,
                provider: Some(req.provider),
            })
            .await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}
