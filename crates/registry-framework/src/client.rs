//! # Generic Client
//!
//! This module defines the generic client for communicating with a store.

use crate::error::StoreError;
use crate::message::{ObjectKey, Persisted, StoreRequest};
use crate::strategy::LifecycleStrategy;
use tokio::sync::{mpsc, oneshot};

/// ## StoreClient
///
/// The `StoreClient<S>` provides a type‑safe, async API for interacting with a
/// `ResourceStore<S>`. It forwards storage requests over a Tokio mpsc channel
/// and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods resolve to `Result<…, StoreError>`.
/// * **Generic** – works with any kind that has a `LifecycleStrategy`.
pub struct StoreClient<S: LifecycleStrategy> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: LifecycleStrategy> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: LifecycleStrategy> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, object: S::Object) -> Result<Persisted<S::Object>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { object, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Reads one object. Takes a bare name for cluster-scoped kinds or an
    /// [`ObjectKey::namespaced`] key for namespaced ones.
    pub async fn get(
        &self,
        key: impl Into<ObjectKey>,
    ) -> Result<Option<S::Object>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        let key = key.into();
        self.sender
            .send(StoreRequest::Get { key, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn list(&self) -> Result<Vec<S::Object>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn update(&self, object: S::Object) -> Result<Persisted<S::Object>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update { object, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn delete(&self, key: impl Into<ObjectKey>) -> Result<S::Object, StoreError> {
        let (respond_to, response) = oneshot::channel();
        let key = key.into();
        self.sender
            .send(StoreRequest::Delete { key, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
