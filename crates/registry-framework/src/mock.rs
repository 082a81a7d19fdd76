//! # Mock Framework & Testing Guide
//!
//! The `MockClient<S>` type hands out the same `StoreClient<S>` as production
//! code but answers requests from a queue of expectations instead of a real
//! store. It lets you test logic *around* a client (error mapping, warning
//! propagation) without spawning a store.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockClient | Real Store |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Validation** | None, answers are scripted | Real strategy hooks run |
//! | **Use Case** | Unit testing code that wraps a client | Testing a strategy or the full registry |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Client Logic Test (Pure Mock)</b></summary>
//!
//! **When to use**: Testing how a kind-specific client maps results and errors.
//!
//! ```rust
//! use registry_framework::field::ErrorList;
//! use registry_framework::mock::MockClient;
//! use registry_framework::names::{NameGenerator, SimpleNameGenerator};
//! use registry_framework::object::{self, ObjectMeta, Resource};
//! use registry_framework::scheme::{ObjectTyper, Scheme};
//! use registry_framework::{LifecycleStrategy, StoreError};
//! use serde::Serialize;
//!
//! #[derive(Debug, Clone, Serialize)]
//! struct Widget { metadata: ObjectMeta }
//!
//! impl Resource for Widget {
//!     const GROUP: &'static str = "example.io";
//!     const VERSION: &'static str = "v1";
//!     const KIND: &'static str = "Widget";
//!     fn metadata(&self) -> &ObjectMeta { &self.metadata }
//!     fn metadata_mut(&mut self) -> &mut ObjectMeta { &mut self.metadata }
//! }
//!
//! struct WidgetStrategy { scheme: Scheme }
//!
//! impl LifecycleStrategy for WidgetStrategy {
//!     type Object = Widget;
//!     fn object_typer(&self) -> &dyn ObjectTyper { &self.scheme }
//!     fn name_generator(&self) -> &dyn NameGenerator { &SimpleNameGenerator }
//!     fn namespace_scoped(&self) -> bool { false }
//!     fn validate(&self, _: &Widget) -> ErrorList { ErrorList::new() }
//!     fn validate_update(&self, _: &Widget, _: &Widget) -> ErrorList { ErrorList::new() }
//!     fn allow_create_on_update(&self) -> bool { false }
//!     fn allow_unconditional_update(&self) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Setup Mocks
//!     let mut mock = MockClient::<WidgetStrategy>::new();
//!     mock.expect_get("a")
//!         .return_ok(Some(Widget { metadata: object::named("a") }));
//!     // Simulate a store that went away
//!     mock.expect_list().return_err(StoreError::StoreClosed);
//!
//!     // 2. Exercise the client
//!     let client = mock.client();
//!     let found = client.get("a").await.unwrap();
//!     assert_eq!(found.unwrap().name(), "a");
//!     assert!(matches!(client.list().await, Err(StoreError::StoreClosed)));
//!
//!     // 3. Verify
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Single Store Test (Fast, Isolated)</b></summary>
//!
//! **When to use**: Testing one kind's strategy through a real store.
//! Create the store with `ResourceStore::new`, spawn `run()`, and drive it
//! through the returned client. See `tests/integration_test.rs`.
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full Registry Test (Comprehensive)</b></summary>
//!
//! **When to use**: End-to-end flows across every kind, concurrency.
//! See the networking registry's `tests/integration_test.rs`.
//! </details>
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the fluent [`MockClient`] API.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{ObjectKey, Persisted, StoreRequest};
use crate::strategy::LifecycleStrategy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type ObjectOf<S> = <S as LifecycleStrategy>::Object;

/// An expected request and the response to give it.
enum Expectation<S: LifecycleStrategy> {
    Get {
        key: ObjectKey,
        response: Result<Option<ObjectOf<S>>, StoreError>,
    },
    List {
        response: Result<Vec<ObjectOf<S>>, StoreError>,
    },
    Create {
        response: Result<Persisted<ObjectOf<S>>, StoreError>,
    },
    Update {
        response: Result<Persisted<ObjectOf<S>>, StoreError>,
    },
    Delete {
        key: ObjectKey,
        response: Result<ObjectOf<S>, StoreError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request
/// that does not match the next expectation panics the mock's task, which
/// the caller observes as [`StoreError::StoreDropped`].
pub struct MockClient<S: LifecycleStrategy> {
    client: StoreClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: LifecycleStrategy> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LifecycleStrategy> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "get for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { key, respond_to },
                        Some(Expectation::Delete {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "delete for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `get` for `key`.
    pub fn expect_get(
        &mut self,
        key: impl Into<ObjectKey>,
    ) -> ExpectationBuilder<S, Option<ObjectOf<S>>> {
        let key = key.into();
        self.builder(move |response| Expectation::Get { key, response })
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<S, Vec<ObjectOf<S>>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<S, Persisted<ObjectOf<S>>> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update`.
    pub fn expect_update(&mut self) -> ExpectationBuilder<S, Persisted<ObjectOf<S>>> {
        self.builder(|response| Expectation::Update { response })
    }

    /// Expects a `delete` for `key`.
    pub fn expect_delete(&mut self, key: impl Into<ObjectKey>) -> ExpectationBuilder<S, ObjectOf<S>> {
        let key = key.into();
        self.builder(move |response| Expectation::Delete { key, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<S> + Send + 'static,
    ) -> ExpectationBuilder<S, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<S: LifecycleStrategy, R> {
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<S> + Send>,
    expectations: Expectations<S>,
}

impl<S: LifecycleStrategy, R> ExpectationBuilder<S, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a `ResourceStore`, the test holds the receiving end
/// of the channel. It can inspect each request as it arrives, assert on the
/// object the client sent, and answer with whatever result the scenario needs.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<S: LifecycleStrategy>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

type Responder<T> = oneshot::Sender<Result<T, StoreError>>;

/// Helper to verify that the next message is a Create request
pub async fn expect_create<S: LifecycleStrategy>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(ObjectOf<S>, Responder<Persisted<ObjectOf<S>>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { object, respond_to }) => Some((object, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<S: LifecycleStrategy>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(ObjectOf<S>, Responder<Persisted<ObjectOf<S>>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update { object, respond_to }) => Some((object, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<S: LifecycleStrategy>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(ObjectKey, Responder<Option<ObjectOf<S>>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ErrorList;
    use crate::names::{NameGenerator, SimpleNameGenerator};
    use crate::object::{self, ObjectMeta, Resource};
    use crate::scheme::{ObjectTyper, Scheme};
    use serde::Serialize;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Gadget {
        metadata: ObjectMeta,
        size: u32,
    }

    impl Resource for Gadget {
        const GROUP: &'static str = "example.io";
        const VERSION: &'static str = "v1";
        const KIND: &'static str = "Gadget";

        fn metadata(&self) -> &ObjectMeta {
            &self.metadata
        }

        fn metadata_mut(&mut self) -> &mut ObjectMeta {
            &mut self.metadata
        }
    }

    struct GadgetStrategy {
        scheme: Scheme,
    }

    impl LifecycleStrategy for GadgetStrategy {
        type Object = Gadget;

        fn object_typer(&self) -> &dyn ObjectTyper {
            &self.scheme
        }

        fn name_generator(&self) -> &dyn NameGenerator {
            &SimpleNameGenerator
        }

        fn namespace_scoped(&self) -> bool {
            false
        }

        fn validate(&self, _obj: &Gadget) -> ErrorList {
            ErrorList::new()
        }

        fn validate_update(&self, _obj: &Gadget, _old: &Gadget) -> ErrorList {
            ErrorList::new()
        }

        fn allow_create_on_update(&self) -> bool {
            false
        }

        fn allow_unconditional_update(&self) -> bool {
            true
        }
    }

    fn gadget(name: &str, size: u32) -> Gadget {
        Gadget {
            metadata: object::named(name),
            size,
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<GadgetStrategy>(10);

        let create_task = tokio::spawn(async move { client.create(gadget("g", 3)).await });

        let (object, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(object.size, 3);
        responder
            .send(Ok(Persisted {
                object,
                warnings: vec!["small".into()],
            }))
            .unwrap();

        let result = create_task.await.unwrap().unwrap();
        assert_eq!(result.warnings, vec!["small".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<GadgetStrategy>::new();

        mock.expect_create().return_ok(Persisted {
            object: gadget("g", 1),
            warnings: Vec::new(),
        });
        mock.expect_get("g").return_ok(Some(gadget("g", 1)));
        mock.expect_update().return_err(StoreError::Conflict {
            kind: "Gadget".into(),
            name: "g".into(),
            reason: "stale".into(),
        });
        mock.expect_delete("g").return_ok(gadget("g", 1));

        let client = mock.client();

        let created = client.create(gadget("g", 1)).await.unwrap();
        assert_eq!(created.object.name(), "g");

        let fetched = client.get("g").await.unwrap();
        assert_eq!(fetched.unwrap().size, 1);

        let err = client.update(gadget("g", 2)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));

        assert_eq!(client.delete("g").await.unwrap().size, 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_namespaced_expectations_match_full_key() {
        let mut mock = MockClient::<GadgetStrategy>::new();
        mock.expect_get(ObjectKey::namespaced("lab", "g"))
            .return_ok(None);

        let client = mock.client();
        assert!(client
            .get(ObjectKey::namespaced("lab", "g"))
            .await
            .unwrap()
            .is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_response() {
        let mock = MockClient::<GadgetStrategy>::new();
        let err = mock.client().list().await.unwrap_err();
        assert_eq!(err, StoreError::StoreDropped);
    }
}
