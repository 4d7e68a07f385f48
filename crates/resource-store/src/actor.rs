//! # Generic Store Actor
//!
//! The `ResourceActor` is the server half of a store. It owns one collection of records and
//! processes requests one at a time, so writes are serialized without locks.

use crate::client::ResourceClient;
use crate::entity::StoredEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::stamp::Timestamps;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, which gives exclusive
/// access to `store` without a `Mutex`. Several actors (one per record kind) run in parallel.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: dependencies are passed into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Product>::new(32);
/// tokio::spawn(actor.run(()));
/// let product = client.create(params).await?;
/// ```
///
/// # Implementation Details
///
/// Records live in a `HashMap` keyed by id, and `order` remembers insertion order so that
/// `list` and the filter-based writes walk records in store order. Ids come from a `u32`
/// sequence starting at 1 and are never reused.
///
/// * **Create**: next id, `from_create_params`, stamp `created_at`/`updated_at`, `on_create`, insert.
/// * **Get**: clone of the record, or `None`.
/// * **List**: records in store order that match the filter, cut to `limit`.
/// * **UpdateWhere**: first match in store order gets `on_update` and a fresh `updated_at`.
///   A failed hook leaves the record as it was.
/// * **DeleteWhere**: first match in store order gets `on_delete` and is removed.
pub struct ResourceActor<T: StoredEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: StoredEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// `context` is handed to every hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" instead of "storefront::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params, &context, entity_type).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    filter,
                    limit,
                    respond_to,
                } => {
                    let items = self.list(filter.as_ref(), limit);
                    debug!(entity_type, ?filter, ?limit, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::UpdateWhere {
                    filter,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, ?filter, ?update, "UpdateWhere");
                    let result = self.update_where(&filter, update, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::DeleteWhere { filter, respond_to } => {
                    debug!(entity_type, ?filter, "DeleteWhere");
                    let result = self.delete_where(&filter, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id, params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        *item.timestamps_mut() = Timestamps::created(Utc::now());

        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        let id = item.id().clone();
        self.store.insert(id.clone(), item.clone());
        self.order.push(id.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    fn list(&self, filter: Option<&T::Filter>, limit: Option<usize>) -> Vec<T> {
        let matching = self
            .order
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|item| filter.map_or(true, |f| item.matches(f)))
            .cloned();
        match limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    fn first_match(&self, filter: &T::Filter) -> Option<T::Id> {
        self.order
            .iter()
            .find(|id| self.store.get(*id).is_some_and(|item| item.matches(filter)))
            .cloned()
    }

    async fn update_where(
        &mut self,
        filter: &T::Filter,
        update: T::Update,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<usize, FrameworkError> {
        let Some(id) = self.first_match(filter) else {
            debug!(entity_type, "No match");
            return Ok(0);
        };
        let Some(mut item) = self.store.get(&id).cloned() else {
            return Ok(0);
        };

        // Hooks work on a copy so a rejected update leaves the stored record untouched.
        if let Err(e) = item.on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        item.timestamps_mut().touch(Utc::now());
        info!(entity_type, id = %item.id(), "Updated");
        self.store.insert(id, item);
        Ok(1)
    }

    async fn delete_where(
        &mut self,
        filter: &T::Filter,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<usize, FrameworkError> {
        let Some(id) = self.first_match(filter) else {
            debug!(entity_type, "No match");
            return Ok(0);
        };

        if let Some(item) = self.store.get(&id) {
            if let Err(e) = item.on_delete(context).await {
                warn!(entity_type, %id, error = %e, "on_delete failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        }
        self.store.remove(&id);
        self.order.retain(|existing| existing != &id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(1)
    }
}
