//! # Generic Client
//!
//! The capability handle for a store. Request handlers hold clients, never actors.

use crate::entity::StoredEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// A type-safe, async handle to a `ResourceActor<T>`. Each call sends one request over the
/// actor's mpsc channel and awaits the answer on a oneshot channel.
///
/// * **Cloneable**: holds only a sender, so clones are cheap and can be shared across tasks.
/// * **Generic**: works with any record kind that implements `StoredEntity`.
#[derive(Clone)]
pub struct ResourceClient<T: StoredEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: StoredEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Stores a new record and returns it with its id and timestamps.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Records in store order, optionally filtered and capped at `limit`.
    pub async fn list(
        &self,
        filter: Option<T::Filter>,
        limit: Option<usize>,
    ) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            filter,
            limit,
            respond_to,
        })
        .await
    }

    /// Applies `update` to the first matching record. Returns how many records changed.
    pub async fn update_where(
        &self,
        filter: T::Filter,
        update: T::Update,
    ) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateWhere {
            filter,
            update,
            respond_to,
        })
        .await
    }

    /// Removes the first matching record. Returns how many records were removed.
    pub async fn delete_where(&self, filter: T::Filter) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::DeleteWhere { filter, respond_to })
            .await
    }
}
