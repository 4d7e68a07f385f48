//! # Search & Ranking
//!
//! Pure functions over a catalog snapshot taken from the product store. Nothing here does
//! I/O or touches shared state, so a search may see a catalog that a concurrent create
//! has already changed.
//!
//! - [`filter_products`]: keeps products satisfying every predicate of a [`SearchQuery`].
//! - [`sort_products`]: stable price ordering, no-op for unknown directives.
//! - [`recommend`]: keyword relevance ranking through a [`RelevanceScorer`].

pub mod filter;
pub mod query;
pub mod recommend;
pub mod sort;

pub use filter::{filter_products, Predicate};
pub use query::{SearchQuery, SortOrder};
pub use recommend::{
    normalize_keywords, recommend, KeywordScorer, RecommendationRequest, RelevanceScorer,
    DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS,
};
pub use sort::sort_products;

use crate::model::Product;

/// Filter then sort.
pub fn search(products: &[Product], query: &SearchQuery) -> Vec<Product> {
    let mut results = filter_products(products, query);
    sort_products(&mut results, query.sort_order());
    results
}


#[cfg(test)]
mod tests {
    use super::test_support::{catalog, titles};
    use super::*;

    #[test]
    fn test_search_filters_then_sorts() {
        let query = SearchQuery::default()
            .category("Home")
            .sort(SortOrder::PriceAsc);
        let out = search(&catalog(), &query);
        assert_eq!(titles(&out), ["Desk Organizer", "Linen Throw", "Minimalist Wall Lamp"]);
    }

    #[test]
    fn test_unknown_sort_keeps_filter_order() {
        let query: SearchQuery =
            serde_json::from_str(r#"{"category":"Fashion","sort":"newest"}"#).unwrap();
        let out = search(&catalog(), &query);
        assert_eq!(titles(&out), ["Teal Silk Scarf", "Cotton Kurta"]);
    }
}
