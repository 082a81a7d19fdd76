//! # PodNetwork Client
//!
//! Provides a high‑level API for the `PodNetwork` store. It wraps a
//! `StoreClient<PodNetworkStrategy>` and maps store errors to
//! [`PodNetworkError`].
use crate::model::PodNetwork;
use crate::pod_network::{PodNetworkError, PodNetworkStrategy};
use async_trait::async_trait;
use registry_framework::{Persisted, Resource, ResourceClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the PodNetwork store.
#[derive(Clone)]
pub struct PodNetworkClient {
    inner: StoreClient<PodNetworkStrategy>,
}

impl PodNetworkClient {
    pub fn new(inner: StoreClient<PodNetworkStrategy>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceClient<PodNetworkStrategy> for PodNetworkClient {
    type Error = PodNetworkError;

    fn inner(&self) -> &StoreClient<PodNetworkStrategy> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        PodNetworkError::from(e)
    }
}

impl PodNetworkClient {
    /// Creates a network. Leave the name empty and set `generateName` to
    /// have the store pick one.
    #[instrument(skip(self, network), fields(name = network.name()))]
    pub async fn create_pod_network(
        &self,
        network: PodNetwork,
    ) -> Result<Persisted<PodNetwork>, PodNetworkError> {
        debug!(?network, "Sending request");
        self.inner.create(network).await.map_err(Self::map_error)
    }

    /// Replaces a stored network. `spec.provider` cannot change.
    #[instrument(skip(self, network), fields(name = network.name()))]
    pub async fn update_pod_network(
        &self,
        network: PodNetwork,
    ) -> Result<Persisted<PodNetwork>, PodNetworkError> {
        debug!(?network, "Sending request");
        self.inner.update(network).await.map_err(Self::map_error)
    }

    /// Reads, modifies and writes back a network, using the read's
    /// `resourceVersion` as the precondition.
    #[instrument(skip(self, mutate))]
    pub async fn modify_pod_network<F>(
        &self,
        name: String,
        mutate: F,
    ) -> Result<Persisted<PodNetwork>, PodNetworkError>
    where
        F: FnOnce(&mut PodNetwork) + Send,
    {
        let mut network = self
            .get(name.clone())
            .await?
            .ok_or(PodNetworkError::NotFound(name))?;
        mutate(&mut network);
        self.update_pod_network(network).await
    }
}
