//! # Storefront
//!
//! Backend for a small e-commerce storefront: a product catalog with search and keyword
//! recommendations, reviews, orders, a login stub and payment intents.
//!
//! ## Layers
//!
//! ### 1. Stores ([`product_actor`], [`review_actor`], [`order_actor`], [`user_actor`])
//! Each record kind lives in a [`ResourceActor`](resource_store::ResourceActor) from the
//! `resource-store` crate. The actor owns the records and applies writes one message at a time.
//!
//! ### 2. Clients ([`clients`])
//! Record-specific wrappers around `ResourceClient<T>` with their own error types.
//!
//! ### 3. Search ([`search`])
//! Pure filter, sort and recommendation functions over a catalog snapshot.
//!
//! ### 4. Handlers ([`handlers`])
//! [`Storefront`](handlers::Storefront) maps requests onto clients, search and payments and
//! reports failures as [`ApiError`](handlers::ApiError).
//!
//! ### 5. Lifecycle ([`lifecycle`])
//! [`StoreSystem`](lifecycle::StoreSystem) spawns and wires the stores, seeds the demo
//! catalog and shuts everything down.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STRIPE_SECRET=sk_test_... RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payments;
pub mod product_actor;
pub mod review_actor;
pub mod search;
pub mod user_actor;
