//! # StoredEntity Trait
//!
//! The `StoredEntity` trait is the contract every record kind (Product, Review, Order, User)
//! implements to be held by the generic [`ResourceActor`](crate::ResourceActor). It names the
//! identifier, the creation and update payloads, the field-equality filter used by `list`,
//! `update_where` and `delete_where`, the injected context and the error type.
//!
//! # Provided Methods (Hooks)
//! - [`StoredEntity::on_create`]
//! - [`StoredEntity::on_delete`]
//!
//! Both default to `Ok(())`. `on_update` is required because every record kind decides for
//! itself which fields an update may touch.

use crate::stamp::Timestamps;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record kind must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other stores. The `Context` type is injected
/// into every hook when the actor is started with `run(context)`, which lets a store depend on
/// clients that were created after it.
#[async_trait]
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Built from the store's `u32` sequence.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a record.
    type Create: Send + Sync + Debug;

    /// Payload for changing an existing record.
    type Update: Send + Sync + Debug;

    /// Field-equality filter. Unset fields match everything.
    type Filter: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` when there are none.
    type Context: Send + Sync;

    /// Error raised by hooks. Boxed into [`FrameworkError::EntityError`](crate::FrameworkError)
    /// on its way back to the caller.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its assigned id and creation payload.
    /// Timestamps are overwritten by the store right after this returns.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Mutable access to the store-managed timestamps.
    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Whether the record satisfies every field set on `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload to the record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
