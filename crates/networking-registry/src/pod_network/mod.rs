//! # PodNetwork Store
//!
//! The `PodNetwork` kind: its lifecycle strategy, error type and the factory
//! that builds its store.
//!
//! ## Structure
//!
//! - [`strategy`] - [`LifecycleStrategy`](registry_framework::LifecycleStrategy) implementation for [`PodNetwork`]
//! - [`error`] - [`PodNetworkError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## Usage
//!
//! ```rust
//! use networking_registry::model::{add_to_scheme, PodNetwork};
//! use networking_registry::pod_network::{self, PodNetworkStrategy};
//! use registry_framework::names::SimpleNameGenerator;
//! use registry_framework::scheme::Scheme;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scheme = Scheme::new();
//!     add_to_scheme(&mut scheme);
//!     let strategy = PodNetworkStrategy::new(Arc::new(scheme), Arc::new(SimpleNameGenerator));
//!
//!     // Create store and client
//!     let (store, client) = pod_network::new(Arc::new(strategy), 32);
//!
//!     // Start the store
//!     tokio::spawn(store.run());
//!
//!     // Use the client
//!     let created = client
//!         .create_pod_network(PodNetwork::new("default", "example.com/macvlan"))
//!         .await?;
//!     assert_eq!(created.object.metadata.generation, Some(1));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod strategy;

pub use error::*;
pub use strategy::*;

use crate::clients::PodNetworkClient;
use registry_framework::ResourceStore;
use std::sync::Arc;

/// Creates a new PodNetwork store and its client.
pub fn new(
    strategy: Arc<PodNetworkStrategy>,
    buffer_size: usize,
) -> (ResourceStore<PodNetworkStrategy>, PodNetworkClient) {
    let (store, generic_client) = ResourceStore::new(strategy, buffer_size);
    (store, PodNetworkClient::new(generic_client))
}
