//! Pure data structures (records and DTOs) held by the resource stores.

pub mod id;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use id::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use user::*;
