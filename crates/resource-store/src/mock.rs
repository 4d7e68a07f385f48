//! # Mock Stores & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running `ResourceActor`. It is the tool for testing
//! code that *uses* a store (request handlers, or a store whose hooks call another store)
//! without standing up the dependency.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real records |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Use Case** | Logic *around* a client | The store itself or the full system |
//!
//! ## Pattern: Store with a Mocked Dependency
//!
//! ```rust,ignore
//! let mut products = MockClient::<Product>::new();
//! products.expect_get(ProductId(1)).return_ok(Some(scarf));
//!
//! let (order_actor, orders) = ResourceActor::<Order>::new(8);
//! tokio::spawn(order_actor.run(ProductClient::new(products.client())));
//!
//! orders.create(params).await?;
//! products.verify();
//! ```
//!
//! ## Pattern: Raw Channel Inspection
//!
//! [`create_mock_client`] returns the client together with the receiving end of its channel,
//! so a test can assert on the exact request and answer it by hand.

use crate::client::ResourceClient;
use crate::entity::StoredEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request of a given kind.
enum Expectation<T: StoredEntity> {
    Create(Result<T, FrameworkError>),
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List(Result<Vec<T>, FrameworkError>),
    UpdateWhere(Result<usize, FrameworkError>),
    DeleteWhere(Result<usize, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// panics the mock task, which surfaces in the test as `ActorDropped`.
pub struct MockClient<T: StoredEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                match (request, next) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (
                        ResourceRequest::UpdateWhere { respond_to, .. },
                        Some(Expectation::UpdateWhere(r)),
                    ) => {
                        let _ = respond_to.send(r);
                    }
                    (
                        ResourceRequest::DeleteWhere { respond_to, .. },
                        Some(Expectation::DeleteWhere(r)),
                    ) => {
                        let _ = respond_to.send(r);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::List)
    }

    pub fn expect_update_where(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::UpdateWhere)
    }

    pub fn expect_delete_where(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::DeleteWhere)
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with either a successful answer or an error.
pub struct ExpectationBuilder<T: StoredEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: StoredEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            wrap: Box::new(wrap),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: StoredEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a List.
#[allow(clippy::type_complexity)]
pub async fn expect_list<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Option<T::Filter>,
    Option<usize>,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::List {
            filter,
            limit,
            respond_to,
        }) => Some((filter, limit, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stamp::Timestamps;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: u32,
        code: String,
        stamps: Timestamps,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: String,
    }

    #[derive(Debug)]
    struct CouponFilter {
        code: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Coupon error")]
    struct CouponError;

    #[async_trait]
    impl StoredEntity for Coupon {
        type Id = u32;
        type Create = CouponCreate;
        type Update = ();
        type Filter = CouponFilter;
        type Context = ();
        type Error = CouponError;

        fn from_create_params(id: u32, params: CouponCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                code: params.code,
                stamps: Timestamps::default(),
            })
        }

        fn id(&self) -> &u32 {
            &self.id
        }

        fn timestamps_mut(&mut self) -> &mut Timestamps {
            &mut self.stamps
        }

        fn matches(&self, filter: &CouponFilter) -> bool {
            filter.code.as_ref().map_or(true, |code| &self.code == code)
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn coupon(id: u32, code: &str) -> Coupon {
        Coupon {
            id,
            code: code.to_string(),
            stamps: Timestamps::default(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_list() {
        let (client, mut receiver) = create_mock_client::<Coupon>(4);

        let task = tokio::spawn(async move {
            client
                .list(Some(CouponFilter { code: Some("EID10".into()) }), Some(1))
                .await
        });

        let (filter, limit, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(filter.unwrap().code.as_deref(), Some("EID10"));
        assert_eq!(limit, Some(1));
        responder.send(Ok(vec![coupon(7, "EID10")])).unwrap();

        let listed = task.await.unwrap().unwrap();
        assert_eq!(listed, vec![coupon(7, "EID10")]);
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Coupon>::new();
        mock.expect_create().return_ok(coupon(1, "WELCOME"));
        mock.expect_get(1).return_ok(Some(coupon(1, "WELCOME")));
        mock.expect_delete_where().return_ok(0);
        mock.expect_update_where()
            .return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let created = client
            .create(CouponCreate { code: "WELCOME".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.map(|c| c.code), Some("WELCOME".to_string()));

        let removed = client
            .delete_where(CouponFilter { code: Some("GONE".into()) })
            .await
            .unwrap();
        assert_eq!(removed, 0);

        let failed = client
            .update_where(CouponFilter { code: None }, ())
            .await;
        assert!(matches!(failed, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }
}
