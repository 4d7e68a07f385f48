use crate::model::UserId;
use resource_store::Timestamps;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER: &str = "email";

/// Represents a registered user.
///
/// Users are created by the login stub; there is no credential or session model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub provider: String,
    #[serde(flatten)]
    pub stamps: Timestamps,
}

/// Payload for registering a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub provider: Option<String>,
}

/// Payload for updating a user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFilter {
    pub email: Option<String>,
}

impl User {
    pub fn new(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            email: params.email,
            name: params.name,
            phone: params.phone,
            photo_url: params.photo_url,
            provider: params
                .provider
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            stamps: Timestamps::default(),
        }
    }
}
