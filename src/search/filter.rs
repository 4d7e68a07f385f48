//! Filter Engine: conjunctive predicates over a catalog snapshot.
use super::query::SearchQuery;
use crate::model::Product;

/// One condition a product must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring of title or description. Holds the lowercased needle.
    Text(String),
    /// Exact, case-sensitive category.
    Category(String),
    MinPrice(f64),
    MaxPrice(f64),
}

impl Predicate {
    pub fn holds(&self, product: &Product) -> bool {
        match self {
            Self::Text(needle) => {
                product.title.to_lowercase().contains(needle.as_str())
                    || product.description.to_lowercase().contains(needle.as_str())
            }
            Self::Category(category) => &product.category == category,
            Self::MinPrice(min) => product.price >= *min,
            Self::MaxPrice(max) => product.price <= *max,
        }
    }
}

/// The predicates a query asks for, in evaluation order.
pub fn predicates(query: &SearchQuery) -> Vec<Predicate> {
    let mut predicates = Vec::with_capacity(4);
    if let Some(text) = query.text.as_deref().filter(|text| !text.is_empty()) {
        predicates.push(Predicate::Text(text.to_lowercase()));
    }
    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        predicates.push(Predicate::Category(category.to_string()));
    }
    if let Some(min) = query.min_price {
        predicates.push(Predicate::MinPrice(min));
    }
    if let Some(max) = query.max_price {
        predicates.push(Predicate::MaxPrice(max));
    }
    predicates
}

/// Products satisfying every predicate in `query`, in input order.
pub fn filter_products(products: &[Product], query: &SearchQuery) -> Vec<Product> {
    let predicates = predicates(query);
    products
        .iter()
        .filter(|product| predicates.iter().all(|p| p.holds(product)))
        .cloned()
        .collect()
}
