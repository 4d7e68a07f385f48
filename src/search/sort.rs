use super::query::SortOrder;
use crate::model::Product;

/// Reorders `products` in place. `slice::sort_by` is stable, so equal prices keep
/// their input order in both directions.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::Unspecified => {}
    }
}
