//! # Order Store
//!
//! Holds customer orders. The actor is started with a [`ProductClient`](crate::clients::ProductClient)
//! as its context, which `on_create` uses to check that every ordered product exists.
//!
//! ```rust,ignore
//! let (order_actor, orders) = order_actor::new(32);
//! tokio::spawn(order_actor.run(product_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_store::ResourceActor;

/// Creates a new Order actor and its client. The product client is injected at `run()`.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
