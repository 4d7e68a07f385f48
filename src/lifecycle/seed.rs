//! Demo catalog loaded at startup unless disabled.
use crate::clients::ProductClient;
use crate::model::ProductCreate;
use crate::product_actor::ProductError;
use tracing::info;

const UNSPLASH_SUFFIX: &str = "?q=80&w=1200&auto=format&fit=crop";

fn image(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{UNSPLASH_SUFFIX}")
}

/// The eight products every fresh storefront starts with.
pub fn demo_catalog() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new(
            "Teal Silk Scarf",
            "Premium silk scarf with subtle geometric pattern",
            1999.0,
            "Fashion",
        )
        .with_stock(25)
        .with_rating(4.6)
        .with_image(image("photo-1520975916090-3105956dac38")),
        ProductCreate::new("Wireless Earbuds Pro", "ANC, 30h battery, IPX5", 5999.0, "Electronics")
            .with_stock(50)
            .with_rating(4.4)
            .with_image(image("photo-1590658268037-6bf12165a8df")),
        ProductCreate::new("Rose Glow Serum", "Vitamin C + Hyaluronic acid", 1299.0, "Beauty")
            .with_stock(80)
            .with_rating(4.3)
            .with_image(image("photo-1611930022073-b7a4ba5fcccd")),
        ProductCreate::new(
            "Minimalist Wall Lamp",
            "Warm dimmable LED, matte gold",
            3499.0,
            "Home Decor",
        )
        .with_stock(15)
        .with_rating(4.5)
        .with_image(image("photo-1505693416388-ac5ce068fe85")),
        ProductCreate::new(
            "Prayer Mat – CloudSoft",
            "Ultra-plush, anti-slip base",
            2499.0,
            "Islamic Essentials",
        )
        .with_stock(40)
        .with_rating(4.8)
        .with_image(image("photo-1602453224934-5a4b63ac2b9f")),
        ProductCreate::new("Hardcover Journal", "120 GSM paper, gold-foil cover", 799.0, "Books")
            .with_stock(120)
            .with_rating(4.2)
            .with_image(image("photo-1519681393784-d120267933ba")),
        ProductCreate::new("Gift Set – Teal Gold", "Scented candle + mug + card", 1499.0, "Gifts")
            .with_stock(30)
            .with_rating(4.1)
            .with_image(image("photo-1519682577862-22b62b24e493")),
        ProductCreate::new("Leather Card Holder", "RFID-blocking, slim design", 999.0, "Accessories")
            .with_stock(60)
            .with_rating(4.0)
            .with_image(image("photo-1617050351951-53c1ce9de2ef")),
    ]
}

/// Creates the demo products in order, so they get ids `product_1` through `product_8`.
pub async fn seed_demo_catalog(products: &ProductClient) -> Result<usize, ProductError> {
    let demo = demo_catalog();
    let count = demo.len();
    for params in demo {
        products.create_product(params).await?;
    }
    info!(count, "Demo catalog seeded");
    Ok(count)
}
