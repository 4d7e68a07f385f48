//! Record-specific clients. Each wraps a `ResourceClient<T>` and implements
//! [`StoreClient`](resource_store::StoreClient) so the generic operations map into its own error type.

pub mod order_client;
pub mod product_client;
pub mod review_client;
pub mod user_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use review_client::ReviewClient;
pub use user_client::UserClient;
