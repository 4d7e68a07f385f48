//! StoredEntity trait implementation for the Order record.
//!
//! The Order store runs with a [`ProductClient`] as its context. Before an order is stored,
//! `on_create` looks up every line item in the catalog and refuses orders for products
//! that do not exist.

use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{
    CartItem, Order, OrderCreate, OrderFilter, OrderId, OrderUpdate, TimelineEntry,
};
use async_trait::async_trait;
use chrono::Utc;
use resource_store::{StoreClient, StoredEntity, Timestamps};
use tracing::{debug, warn};

/// Shape checks shared by the request boundary and the store.
pub(crate) fn check_items(items: &[CartItem]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::ValidationError(
            "order must contain at least one item".to_string(),
        ));
    }
    if let Some(item) = items.iter().find(|item| item.quantity < 1) {
        return Err(OrderError::ValidationError(format!(
            "quantity for {} must be at least 1",
            item.product_id
        )));
    }
    Ok(())
}

#[async_trait]
impl StoredEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        check_items(&params.items)?;
        Ok(Self::new(id, params))
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.stamps
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.id.map_or(true, |id| self.id == id)
            && filter.user_id.map_or(true, |id| self.user_id == id)
            && filter
                .status
                .as_ref()
                .map_or(true, |status| &self.status == status)
    }

    /// Verifies each line item against the product store.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), Self::Error> {
        for item in &self.items {
            let found = products
                .get(item.product_id)
                .await
                .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
            if found.is_none() {
                warn!(order_id = %self.id, product_id = %item.product_id, "Unknown product");
                return Err(OrderError::InvalidProduct(item.product_id.to_string()));
            }
        }
        debug!(order_id = %self.id, items = self.items.len(), "Line items verified");
        self.timeline.push(TimelineEntry {
            status: self.status.clone(),
            at: self.stamps.created_at,
        });
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _products: &ProductClient,
    ) -> Result<(), Self::Error> {
        if let Some(status) = update.status {
            if status.trim().is_empty() {
                return Err(OrderError::ValidationError(
                    "status must not be empty".to_string(),
                ));
            }
            self.timeline.push(TimelineEntry {
                status: status.clone(),
                at: Utc::now(),
            });
            self.status = status;
        }
        if let Some(payment_id) = update.payment_id {
            self.payment_id = Some(payment_id);
        }
        if let Some(provider) = update.provider {
            self.provider = Some(provider);
        }
        Ok(())
    }
}
