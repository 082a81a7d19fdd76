//! # Networking Registry
//!
//! Storage for the `networking.k8s.io/v1alpha1` kinds `PodNetwork` and
//! `PodNetworkAttachment`, built on the generic store of
//! [`registry_framework`].
//!
//! ## Core Components
//!
//! - **[model]**: The API types and their scheme registration.
//! - **[validation]**: Field validators; every problem in an object is reported at once.
//! - **[pod_network]**, **[pod_network_attachment]**: Each kind's
//!   [`LifecycleStrategy`](registry_framework::LifecycleStrategy), error type and store factory.
//! - **[clients]**: Typed wrappers around the generic store client.
//! - **[config]**: TOML configuration.
//! - **[lifecycle]**: The [`NetworkingRegistry`](lifecycle::NetworkingRegistry) orchestrator.
//!
//! ## Testing
//!
//! See [`registry_framework::mock`] for utilities to test clients without spawning stores.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod pod_network;
pub mod pod_network_attachment;
pub mod validation;
