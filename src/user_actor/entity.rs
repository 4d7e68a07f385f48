//! StoredEntity trait implementation for the User record.

use super::error::UserError;
use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate};
use async_trait::async_trait;
use resource_store::{StoredEntity, Timestamps};

#[async_trait]
impl StoredEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = UserFilter;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    fn id(&self) -> &UserId {
        &self.id
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.stamps
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter
            .email
            .as_ref()
            .map_or(true, |email| self.email.as_ref() == Some(email))
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(photo_url) = update.photo_url {
            self.photo_url = Some(photo_url);
        }
        Ok(())
    }
}
