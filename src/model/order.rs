/// Represents a customer order.
///
/// # Resource Store
/// This struct implements the [`StoredEntity`](resource_store::StoredEntity) trait.
/// Its `on_create` hook checks every line item against the product store, which is
/// injected as the actor's context.
use crate::model::{OrderId, ProductId, UserId};
use chrono::{DateTime, Utc};
use resource_store::Timestamps;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "INR";
pub const PENDING: &str = "pending";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// One product line in a cart or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A status change recorded on the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub payment_id: Option<String>,
    pub provider: Option<String>,
    pub address: Option<serde_json::Value>,
    pub timeline: Vec<TimelineEntry>,
    #[serde(flatten)]
    pub stamps: Timestamps,
}

/// Payload for placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub address: Option<serde_json::Value>,
}

impl Order {
    /// A new order starts `pending` with an empty timeline.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            items: params.items,
            amount: params.amount,
            currency: params.currency,
            status: PENDING.to_string(),
            payment_id: params.payment_id,
            provider: params.provider,
            address: params.address,
            timeline: Vec::new(),
            stamps: Timestamps::default(),
        }
    }
}

/// Changes to an order. A new status is also appended to the timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<String>,
    pub payment_id: Option<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub id: Option<OrderId>,
    pub user_id: Option<UserId>,
    pub status: Option<String>,
}

impl OrderFilter {
    pub fn by_id(id: OrderId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
