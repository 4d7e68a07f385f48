//! Recommendation Scorer.
//!
//! Products are scored by a [`RelevanceScorer`], zero scores are dropped, and the rest are
//! ranked by descending score with catalog order breaking ties.
use crate::model::{Product, UserId};
use serde::{Deserialize, Serialize};

/// Upper bound on a ranked recommendation list.
pub const MAX_RECOMMENDATIONS: usize = 12;
/// How many catalog products are returned when there are no keywords.
pub const DEFAULT_RECOMMENDATIONS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Accepted for API compatibility; scoring does not use it.
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub recent_searches: Vec<String>,
}

impl RecommendationRequest {
    pub fn keywords(&self) -> Vec<String> {
        normalize_keywords(&self.recent_searches)
    }
}

/// Lowercases and de-duplicates search terms, keeping first occurrences in order.
pub fn normalize_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(raw.len());
    for term in raw {
        let term = term.as_ref().to_lowercase();
        if !keywords.contains(&term) {
            keywords.push(term);
        }
    }
    keywords
}

/// Relevance of one product to a set of lowercased keywords. Zero means irrelevant.
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, product: &Product, keywords: &[String]) -> usize;
}

/// Counts the keywords found in the title, description or category.
///
/// A keyword counts once no matter how many fields or how many times it appears. The
/// empty keyword is a substring of everything and therefore always counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl RelevanceScorer for KeywordScorer {
    fn score(&self, product: &Product, keywords: &[String]) -> usize {
        let fields = [
            product.title.to_lowercase(),
            product.description.to_lowercase(),
            product.category.to_lowercase(),
        ];
        keywords
            .iter()
            .filter(|keyword| fields.iter().any(|field| field.contains(keyword.as_str())))
            .count()
    }
}

/// Ranks `products` against `keywords`.
///
/// With no keywords this is the first [`DEFAULT_RECOMMENDATIONS`] products in store order.
/// Otherwise at most [`MAX_RECOMMENDATIONS`] products with a non-zero score, best first.
pub fn recommend(
    products: &[Product],
    keywords: &[String],
    scorer: &dyn RelevanceScorer,
) -> Vec<Product> {
    if keywords.is_empty() {
        return products.iter().take(DEFAULT_RECOMMENDATIONS).cloned().collect();
    }

    let mut scored: Vec<(usize, &Product)> = products
        .iter()
        .map(|product| (scorer.score(product, keywords), product))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(_, product)| product.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{catalog, product, titles};

    fn keywords(raw: &[&str]) -> Vec<String> {
        normalize_keywords(raw)
    }

    #[test]
    fn test_scarf_keyword_finds_the_scarf_only() {
        let products = vec![
            product(1, "Teal Silk Scarf", 1999.0, "Fashion"),
            product(2, "Wireless Earbuds Pro", 5999.0, "Electronics"),
        ];
        let kw = keywords(&["scarf"]);
        assert!(KeywordScorer.score(&products[0], &kw) >= 1);
        assert_eq!(KeywordScorer.score(&products[1], &kw), 0);

        let ranked = recommend(&products, &kw, &KeywordScorer);
        assert_eq!(titles(&ranked), ["Teal Silk Scarf"]);
    }

    #[test]
    fn test_keyword_counts_once_across_fields() {
        let mut scarf = product(1, "Teal Silk Scarf", 1999.0, "Scarf");
        scarf.description = "A scarf. Another scarf.".into();
        assert_eq!(KeywordScorer.score(&scarf, &keywords(&["SCARF"])), 1);
        assert_eq!(KeywordScorer.score(&scarf, &keywords(&["scarf", "teal"])), 2);
    }

    #[test]
    fn test_duplicate_terms_collapse() {
        assert_eq!(keywords(&["Teal", "teal", "TEAL", "gold"]), ["teal", "gold"]);
    }

    #[test]
    fn test_higher_scores_first_ties_in_catalog_order() {
        let products = vec![
            product(1, "Gold Pen", 100.0, "Office"),
            product(2, "Teal Gold Set", 100.0, "Gifts"),
            product(3, "Gold Ring", 100.0, "Jewellery"),
            product(4, "Blue Mug", 100.0, "Home"),
        ];
        let ranked = recommend(&products, &keywords(&["gold", "teal"]), &KeywordScorer);
        assert_eq!(titles(&ranked), ["Teal Gold Set", "Gold Pen", "Gold Ring"]);
    }

    #[test]
    fn test_empty_keywords_return_first_eight() {
        let products = catalog();
        assert!(products.len() > DEFAULT_RECOMMENDATIONS);
        let ranked = recommend(&products, &[], &KeywordScorer);
        assert_eq!(ranked, products[..DEFAULT_RECOMMENDATIONS].to_vec());
    }

    #[test]
    fn test_empty_keywords_on_small_catalog() {
        let products = vec![product(1, "Only", 1.0, "X")];
        assert_eq!(recommend(&products, &[], &KeywordScorer), products);
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let products = catalog();
        let ranked = recommend(&products, &[String::new()], &KeywordScorer);
        let expected = products.len().min(MAX_RECOMMENDATIONS);
        assert_eq!(ranked, products[..expected].to_vec());
    }

    #[test]
    fn test_truncates_to_twelve() {
        let products: Vec<Product> = (1..=20)
            .map(|n| product(n, &format!("Teal item {n}"), 100.0, "Gifts"))
            .collect();
        let ranked = recommend(&products, &keywords(&["teal"]), &KeywordScorer);
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        assert_eq!(ranked[0].title, "Teal item 1");
        assert_eq!(ranked[11].title, "Teal item 12");
    }

    #[test]
    fn test_custom_scorer_is_used() {
        struct CheapFirst;
        impl RelevanceScorer for CheapFirst {
            fn score(&self, product: &Product, _keywords: &[String]) -> usize {
                if product.price < 1000.0 { 2 } else { 1 }
            }
        }

        let products = vec![
            product(1, "Dear", 5000.0, "X"),
            product(2, "Cheap", 500.0, "X"),
        ];
        let ranked = recommend(&products, &keywords(&["anything"]), &CheapFirst);
        assert_eq!(titles(&ranked), ["Cheap", "Dear"]);
    }

    #[test]
    fn test_request_parses_without_user() {
        let req: RecommendationRequest =
            serde_json::from_str(r#"{"recent_searches":["Scarf","scarf"]}"#).unwrap();
        assert_eq!(req.user_id, None);
        assert_eq!(req.keywords(), ["scarf"]);
    }
}
