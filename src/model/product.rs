/// Represents a product in the catalog.
///
/// # Resource Store
/// This struct implements the [`StoredEntity`](resource_store::StoredEntity) trait,
/// allowing it to be held by a [`ResourceActor`](resource_store::ResourceActor).
///
/// See [`impl StoredEntity for Product`](#impl-StoredEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Filters ([`ProductFilter`])
use crate::model::ProductId;
use resource_store::Timestamps;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub images: Vec<String>,
    pub category: String,
    pub rating: f64,
    pub supplier: Option<String>,
    pub supplier_link: Option<String>,
    pub attributes: BTreeMap<String, serde_json::Value>,
    #[serde(flatten)]
    pub stamps: Timestamps,
}

impl Product {
    /// Builds a product from its assigned id and creation payload.
    ///
    /// Timestamps start zeroed; the store stamps them on insert.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            price: params.price,
            stock: params.stock,
            images: params.images,
            category: params.category,
            rating: params.rating,
            supplier: params.supplier,
            supplier_link: params.supplier_link,
            attributes: params.attributes,
            stamps: Timestamps::default(),
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub supplier_link: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl ProductCreate {
    /// A minimal payload; the remaining fields take their defaults.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            stock: 0,
            images: Vec::new(),
            category: category.into(),
            rating: 0.0,
            supplier: None,
            supplier_link: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }
}

/// Changes to an existing product. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub images: Option<Vec<String>>,
}

/// Field-equality filter over products. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub id: Option<ProductId>,
    pub category: Option<String>,
    pub title: Option<String>,
}

impl ProductFilter {
    pub fn by_id(id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }
}
