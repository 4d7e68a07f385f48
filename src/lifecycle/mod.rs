//! Startup, wiring, seeding and shutdown of the stores.

pub mod seed;
pub mod store_system;
pub mod telemetry;

pub use seed::{demo_catalog, seed_demo_catalog};
pub use store_system::StoreSystem;
pub use telemetry::setup_tracing;
