//! # PodNetworkAttachment Store
//!
//! The `PodNetworkAttachment` kind: its lifecycle strategy, error type and
//! the factory that builds its store.
//!
//! - [`strategy`] - [`LifecycleStrategy`](registry_framework::LifecycleStrategy) implementation for [`PodNetworkAttachment`](crate::model::PodNetworkAttachment)
//! - [`error`] - [`PodNetworkAttachmentError`]
//! - [`new()`] - Factory function that creates the store and client

pub mod error;
pub mod strategy;

pub use error::*;
pub use strategy::*;

use crate::clients::PodNetworkAttachmentClient;
use registry_framework::ResourceStore;
use std::sync::Arc;

/// Creates a new PodNetworkAttachment store and its client.
pub fn new(
    strategy: Arc<PodNetworkAttachmentStrategy>,
    buffer_size: usize,
) -> (
    ResourceStore<PodNetworkAttachmentStrategy>,
    PodNetworkAttachmentClient,
) {
    let (store, generic_client) = ResourceStore::new(strategy, buffer_size);
    (store, PodNetworkAttachmentClient::new(generic_client))
}
