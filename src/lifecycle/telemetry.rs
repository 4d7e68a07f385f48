//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by `RUST_LOG`.
//! Module paths are hidden; store logs carry an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and writes
//! RUST_LOG=debug cargo run    # every request with its payload
//! ```
//!
//! With `RUST_LOG=info`, placing an order looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO checkout:create_order: Order placed order_id=order_1 amount=4498.0
//! ```
//!
//! Store actors log from their own tasks, so only the caller's lines carry its spans.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
