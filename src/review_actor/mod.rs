//! # Review Store
//!
//! Holds product reviews. Reviews are listed per product and carry a 1..=5 star rating,
//! which is checked both at the request boundary and when the record is built.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ReviewClient;
use crate::model::Review;
use resource_store::ResourceActor;

/// Creates a new Review actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ReviewClient::new(generic_client))
}
