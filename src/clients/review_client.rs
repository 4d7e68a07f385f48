use crate::model::{ProductId, Review, ReviewCreate, ReviewFilter};
use crate::review_actor::ReviewError;
use async_trait::async_trait;
use resource_store::{FrameworkError, ResourceClient, StoreClient};
use tracing::instrument;

/// Client for interacting with the Review store.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(product_id = %params.product_id))]
    pub async fn create_review(&self, params: ReviewCreate) -> Result<Review, ReviewError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Reviews for one product in the order they were posted.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, product_id: ProductId) -> Result<Vec<Review>, ReviewError> {
        self.list(Some(ReviewFilter::by_product(product_id)), None)
            .await
    }
}

#[async_trait]
impl StoreClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<ReviewError>()
            .unwrap_or_else(|other| ReviewError::ActorCommunicationError(other.to_string()))
    }
}
