use serde::{Deserialize, Serialize};

/// Ordering applied after filtering.
///
/// Any directive other than the two price orders deserializes to `Unspecified`
/// and leaves the filtered sequence as it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Catalog search parameters. Every field is optional and absent fields match everything.
///
/// Nothing ties `min_price` to `max_price`; an inverted range simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

impl SearchQuery {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort.unwrap_or_default()
    }
}
