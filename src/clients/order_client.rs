//! # Order Client
//!
//! Wraps `ResourceClient<Order>`. Creation may fail with [`OrderError::InvalidProduct`]
//! when the store's `on_create` hook cannot find a product; the typed error survives the
//! trip through the actor.
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use resource_store::{FrameworkError, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(user_id = %params.user_id, items = params.items.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Moves an order to `status` and returns the updated record.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: String) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            status: Some(status),
            ..OrderUpdate::default()
        };
        let matched = self.update_where(OrderFilter::by_id(id), update).await?;
        if matched == 0 {
            return Err(OrderError::NotFound(id.to_string()));
        }
        self.get_order(id).await
    }
}

#[async_trait]
impl StoreClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<OrderError>()
            .unwrap_or_else(|other| OrderError::ActorCommunicationError(other.to_string()))
    }
}
