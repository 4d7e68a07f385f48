//! # StoreClient Trait
//!
//! Common read and filter-based write operations for record-specific clients, built on top of
//! a generic `ResourceClient`. A wrapper only supplies `inner()` and `map_error()`.
use crate::{FrameworkError, ResourceClient, StoredEntity};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl StoreClient<Review> for ReviewClient {
///     type Error = ReviewError;
///
///     fn inner(&self) -> &ResourceClient<Review> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ReviewError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get(), list(), update_where() and delete_where() come for free.
/// let reviews = client.list(Some(filter), None).await?;
/// ```
#[async_trait]
pub trait StoreClient<T: StoredEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the record-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Records in store order matching `filter`, capped at `limit`.
    #[tracing::instrument(skip(self))]
    async fn list(
        &self,
        filter: Option<T::Filter>,
        limit: Option<usize>,
    ) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter, limit).await.map_err(Self::map_error)
    }

    /// Update the first record matching `filter`. Zero means no match.
    #[tracing::instrument(skip(self))]
    async fn update_where(&self, filter: T::Filter, update: T::Update) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .update_where(filter, update)
            .await
            .map_err(Self::map_error)
    }

    /// Delete the first record matching `filter`. Zero means no match.
    #[tracing::instrument(skip(self))]
    async fn delete_where(&self, filter: T::Filter) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_where(filter).await.map_err(Self::map_error)
    }
}
