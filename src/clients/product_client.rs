//! # Product Client
//!
//! The Catalog Store interface used by request handlers. It wraps a
//! `ResourceClient<Product>` and adds catalog-specific calls.
use crate::model::{Product, ProductCreate, ProductFilter, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_store::{FrameworkError, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<ProductError>()
            .unwrap_or_else(|other| ProductError::ActorCommunicationError(other.to_string()))
    }
}

impl ProductClient {
    /// Adds a product and returns the stored record, id and timestamps included.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The whole catalog, or only the products whose category equals `category`.
    #[instrument(skip(self))]
    pub async fn list_products(&self, category: Option<String>) -> Result<Vec<Product>, ProductError> {
        let filter = category.map(ProductFilter::by_category);
        self.list(filter, None).await
    }

    /// Current snapshot of every product in store order.
    pub async fn catalog(&self) -> Result<Vec<Product>, ProductError> {
        self.list(None, None).await
    }

    /// Looks a product up by id. Absence is an error here, unlike `get`.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_store::mock::{create_mock_client, expect_create, MockClient};

    fn scarf(id: u32) -> Product {
        Product::new(
            ProductId(id),
            ProductCreate::new("Teal Silk Scarf", "Premium silk scarf", 1999.0, "Fashion"),
        )
    }

    #[tokio::test]
    async fn test_create_product_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Product>(4);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate::new("Teal Silk Scarf", "silk", 1999.0, "Fashion"))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.title, "Teal Silk Scarf");
        responder.send(Ok(scarf(1))).unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(42)).return_ok(None);

        let client = ProductClient::new(mock.client());
        let result = client.get_product(ProductId(42)).await;
        assert_eq!(result, Err(ProductError::NotFound("product_42".to_string())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            ProductError::ValidationError("price must be a non-negative number".into()),
        )));
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = ProductClient::new(mock.client());
        let created = client
            .create_product(ProductCreate::new("Broken", "", -5.0, "Misc"))
            .await;
        assert!(matches!(created, Err(ProductError::ValidationError(_))));

        let listed = client.catalog().await;
        assert_eq!(
            listed,
            Err(ProductError::ActorCommunicationError("Actor closed".to_string()))
        );
        mock.verify();
    }
}
