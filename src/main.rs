use anyhow::Context;
use storefront::config::StorefrontConfig;
use storefront::handlers::{ApiError, AuthRequest};
use storefront::lifecycle::{setup_tracing, StoreSystem};
use storefront::model::{CartItem, OrderCreate, ProductId, ReviewCreate};
use storefront::payments::PaymentIntentRequest;
use storefront::search::{RecommendationRequest, SearchQuery, SortOrder};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = StorefrontConfig::from_env();
    info!(buffer_size = config.buffer_size, "Starting storefront");
    let system = StoreSystem::start(config)
        .await
        .context("failed to start the storefront")?;
    let store = &system.storefront;

    info!(message = %store.root().message);

    let user = store
        .login(AuthRequest {
            email: Some("amina@example.com".to_string()),
            name: Some("Amina".to_string()),
            ..AuthRequest::default()
        })
        .instrument(tracing::info_span!("login"))
        .await?;
    info!(user_id = %user.id, "Signed in");

    let span = tracing::info_span!("browse");
    async {
        let query = SearchQuery::default()
            .min_price(1000.0)
            .max_price(4000.0)
            .sort(SortOrder::PriceAsc);
        let hits = store.search(query).await?;
        for product in &hits {
            info!(product_id = %product.id, title = %product.title, price = product.price, "Hit");
        }

        let picks = store
            .recommend(RecommendationRequest {
                user_id: Some(user.id),
                recent_searches: vec!["teal".to_string(), "gold".to_string()],
            })
            .await?;
        info!(count = picks.len(), first = ?picks.first().map(|p| &p.title), "Recommended");
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    let review = store
        .create_review(ReviewCreate {
            product_id: ProductId(1),
            user_id: user.id,
            rating: 5,
            comment: Some("Lovely colour".to_string()),
        })
        .await?;
    info!(review_id = %review.id, "Review posted");

    let span = tracing::info_span!("checkout");
    let checkout = async {
        let order = store
            .create_order(OrderCreate {
                user_id: user.id,
                items: vec![
                    CartItem {
                        product_id: ProductId(1),
                        quantity: 1,
                    },
                    CartItem {
                        product_id: ProductId(5),
                        quantity: 1,
                    },
                ],
                amount: 4498.0,
                currency: "INR".to_string(),
                payment_id: None,
                provider: Some("stripe".to_string()),
                address: None,
            })
            .await?;

        let intent = store
            .create_payment_intent(PaymentIntentRequest {
                amount: 449_800,
                currency: order.currency.clone(),
                provider: "stripe".to_string(),
            })
            .await?;
        info!(provider = %intent.provider, has_secret = intent.client_secret.is_some(), "Payment intent");

        let paid = store
            .update_order_status(order.id, "paid".to_string())
            .await?;
        Ok::<_, ApiError>(paid)
    }
    .instrument(span)
    .await;

    match checkout {
        Ok(order) => info!(order_id = %order.id, status = %order.status, "Checkout complete"),
        Err(e) => error!(error = %e, status = e.status_code(), "Checkout failed"),
    }

    system
        .shutdown()
        .await
        .map_err(anyhow::Error::msg)?;

    info!("Done");
    Ok(())
}
