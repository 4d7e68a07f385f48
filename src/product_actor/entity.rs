//! StoredEntity trait implementation for the Product record.
//!
//! Filters compare ids, categories and titles by exact equality. Updates re-check the
//! price invariant so a product can never be stored with a negative or non-finite price.

use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_store::{StoredEntity, Timestamps};

pub(crate) fn check_price(price: f64) -> Result<(), ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ProductError::ValidationError(format!(
            "price must be a non-negative number, got {price}"
        )))
    }
}

#[async_trait]
impl StoredEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        check_price(params.price)?;
        Ok(Self::new(id, params))
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.stamps
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.id.map_or(true, |id| self.id == id)
            && filter
                .category
                .as_ref()
                .map_or(true, |category| &self.category == category)
            && filter
                .title
                .as_ref()
                .map_or(true, |title| &self.title == title)
    }

    /// Applies the set fields of `update`. The id is never touched.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scarf() -> Product {
        Product::new(
            ProductId(1),
            ProductCreate::new("Teal Silk Scarf", "Premium silk scarf", 1999.0, "Fashion"),
        )
    }

    #[test]
    fn test_filter_fields_are_conjunctive() {
        let product = scarf();
        assert!(product.matches(&ProductFilter::default()));
        assert!(product.matches(&ProductFilter::by_category("Fashion")));
        assert!(!product.matches(&ProductFilter::by_category("fashion")));
        assert!(!product.matches(&ProductFilter {
            id: Some(ProductId(1)),
            category: Some("Books".into()),
            title: None,
        }));
    }

    #[test]
    fn test_rejects_negative_price() {
        let params = ProductCreate::new("Broken", "", -1.0, "Misc");
        assert!(matches!(
            Product::from_create_params(ProductId(2), params),
            Err(ProductError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_unset_fields() {
        let mut product = scarf();
        let update = ProductUpdate {
            stock: Some(4),
            ..ProductUpdate::default()
        };
        product.on_update(update, &()).await.unwrap();
        assert_eq!(product.stock, 4);
        assert_eq!(product.price, 1999.0);
        assert_eq!(product.id, ProductId(1));

        let bad = ProductUpdate {
            price: Some(f64::NAN),
            ..ProductUpdate::default()
        };
        assert!(product.on_update(bad, &()).await.is_err());
        assert_eq!(product.price, 1999.0);
    }
}
