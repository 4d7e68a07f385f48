//! # Resource Store
//!
//! An in-memory document store built on the **Actor Model**. Each record kind gets its own
//! [`ResourceActor`] running in a Tokio task. The actor owns the collection outright and
//! handles one request at a time, so the store serializes its own writes and nothing needs a
//! lock. Callers hold a cheap, cloneable [`ResourceClient`].
//!
//! ## Collection API
//!
//! The request set follows the shape of a document database collection:
//!
//! | Operation | Answer | Notes |
//! |-----------|--------|-------|
//! | `create(params)` | the stored record | id assigned, `created_at`/`updated_at` stamped |
//! | `get(id)` | `Option<record>` | |
//! | `list(filter?, limit?)` | records in store order | |
//! | `update_where(filter, changes)` | count | first match in store order, `updated_at` refreshed |
//! | `delete_where(filter)` | count | first match in store order |
//!
//! A count of zero is "no match", never an error.
//!
//! ## Layers
//!
//! 1. **Record Layer** ([`StoredEntity`]) - ids, payloads, filters and lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the collection itself.
//! 3. **Interface Layer** ([`ResourceClient`], [`StoreClient`]) - type-safe requests.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! A store of orders can check products through a product client it receives when started:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(ProductClient::new(product_client.clone())));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so code that
//! depends on a store can be tested without running one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod stamp;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::StoreClient;
pub use entity::StoredEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use stamp::Timestamps;
