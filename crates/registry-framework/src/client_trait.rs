//! # ResourceClient Trait
//!
//! Provides a common interface for kind‑specific clients, adding default
//! `get`, `list` and `delete` methods built on top of a generic `StoreClient`.
use crate::message::ObjectKey;
use crate::{LifecycleStrategy, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for kind-specific clients to inherit the read and delete verbs.
///
/// Create and update return kind-specific results (field errors mapped to the
/// kind's error type), so each client writes those itself.
///
/// # Example
///
/// ```rust
/// use registry_framework::field::ErrorList;
/// use registry_framework::names::{NameGenerator, SimpleNameGenerator};
/// use registry_framework::object::{ObjectMeta, Resource};
/// use registry_framework::scheme::{ObjectTyper, Scheme};
/// use registry_framework::{LifecycleStrategy, ResourceClient, StoreClient, StoreError};
/// use async_trait::async_trait;
/// use serde::Serialize;
///
/// // 1. Define the kind and its strategy
/// #[derive(Debug, Clone, Serialize)]
/// struct Widget { metadata: ObjectMeta }
///
/// impl Resource for Widget {
///     const GROUP: &'static str = "example.io";
///     const VERSION: &'static str = "v1";
///     const KIND: &'static str = "Widget";
///     fn metadata(&self) -> &ObjectMeta { &self.metadata }
///     fn metadata_mut(&mut self) -> &mut ObjectMeta { &mut self.metadata }
/// }
///
/// struct WidgetStrategy { scheme: Scheme }
///
/// impl LifecycleStrategy for WidgetStrategy {
///     type Object = Widget;
///     fn object_typer(&self) -> &dyn ObjectTyper { &self.scheme }
///     fn name_generator(&self) -> &dyn NameGenerator { &SimpleNameGenerator }
///     fn namespace_scoped(&self) -> bool { false }
///     fn validate(&self, _: &Widget) -> ErrorList { ErrorList::new() }
///     fn validate_update(&self, _: &Widget, _: &Widget) -> ErrorList { ErrorList::new() }
///     fn allow_create_on_update(&self) -> bool { false }
///     fn allow_unconditional_update(&self) -> bool { true }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("widget error: {0}")]
/// struct WidgetError(String);
///
/// // 2. Define Client Wrapper
/// struct WidgetClient {
///     inner: StoreClient<WidgetStrategy>,
/// }
///
/// // 3. Implement ResourceClient
/// #[async_trait]
/// impl ResourceClient<WidgetStrategy> for WidgetClient {
///     type Error = WidgetError;
///
///     fn inner(&self) -> &StoreClient<WidgetStrategy> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         WidgetError(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: WidgetClient) {
///     // get(), list() and delete() are provided automatically!
///     let _ = client.get("a").await;
///     let _ = client.list().await;
///     let _ = client.delete("a").await;
/// }
/// ```
#[async_trait]
pub trait ResourceClient<S: LifecycleStrategy>: Send + Sync {
    /// The kind-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map store errors to the kind-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an object by name (or namespaced key).
    #[tracing::instrument(skip(self))]
    async fn get<K>(&self, key: K) -> Result<Option<S::Object>, Self::Error>
    where
        K: Into<ObjectKey> + std::fmt::Debug + Send,
    {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// List every stored object, ordered by name.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<S::Object>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an object by name (or namespaced key), returning what was removed.
    #[tracing::instrument(skip(self))]
    async fn delete<K>(&self, key: K) -> Result<S::Object, Self::Error>
    where
        K: Into<ObjectKey> + std::fmt::Debug + Send,
    {
        tracing::debug!("Sending request");
        self.inner().delete(key).await.map_err(Self::map_error)
    }
}
