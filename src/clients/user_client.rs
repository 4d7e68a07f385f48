use crate::model::{User, UserCreate, UserFilter};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_store::{FrameworkError, ResourceClient, StoreClient};
use tracing::instrument;

/// Client for interacting with the User store.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// First user registered with `email`, if any.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let filter = UserFilter {
            email: Some(email.to_string()),
        };
        let mut found = self.list(Some(filter), Some(1)).await?;
        Ok(found.pop())
    }
}

#[async_trait]
impl StoreClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<UserError>()
            .unwrap_or_else(|other| UserError::ActorCommunicationError(other.to_string()))
    }
}
