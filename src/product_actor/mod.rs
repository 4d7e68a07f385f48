//! # Product Store
//!
//! The Catalog Store. It owns the authoritative product collection; search and
//! recommendation only ever see snapshots returned by `list`.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoredEntity`](resource_store::StoredEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = product_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let scarf = client
//!     .create_product(ProductCreate::new("Teal Silk Scarf", "Premium silk", 1999.0, "Fashion"))
//!     .await?;
//! let fashion = client.list_products(Some("Fashion".into())).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_store::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
