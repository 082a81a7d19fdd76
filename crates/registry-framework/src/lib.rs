//! # Registry Framework
//!
//! This crate provides the building blocks for a declarative-API resource
//! registry: a generic store that persists objects of one kind, and the
//! per-kind [`LifecycleStrategy`] the store consults at every create and
//! update.
//!
//! ## Why a Generic Store + Per-Kind Strategy?
//!
//! Every kind in a declarative API goes through the same storage steps:
//! stamp system fields, check the `resourceVersion` precondition, validate,
//! persist. What differs between kinds is only the *policy*: which fields are
//! required, which are immutable, whether the kind is namespaced.
//!
//! - The store ([`ResourceStore`]) owns the steps, written once.
//! - The strategy ([`LifecycleStrategy`]) owns the policy, one per kind.
//! - The client ([`StoreClient`]) is the only way in, so every write goes
//!   through the strategy.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - The channel-per-task pattern each store runs on
//!
//! ## Architecture Overview
//!
//! 1. **Model Layer** ([`object`], [`field`]) - Object metadata and field-level errors
//! 2. **Policy Layer** ([`LifecycleStrategy`], [`validation`]) - Per-kind rules
//! 3. **Runtime Layer** ([`ResourceStore`]) - Request processing and concurrency
//! 4. **Interface Layer** ([`StoreClient`], [`ResourceClient`]) - Type-safe communication
//!
//! ## Validation Errors
//!
//! Validation never stops at the first problem. Hooks return an [`ErrorList`]
//! of every violation, each carrying the path of the offending field
//! (`spec.parametersRefs[1].name`), and the store reports them together as
//! [`StoreError::Invalid`].
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are processed **sequentially** within a store (no locks needed!)
//! - Stores of different kinds run in **parallel**
//! - Strategies are stateless and shared behind an `Arc`
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers store requests
//! from scripted expectations, for testing code that wraps a client.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod field;
pub mod message;
pub mod mock;
pub mod names;
pub mod object;
pub mod scheme;
pub mod store;
pub mod strategy;
pub mod tracing;
pub mod validation;

// Re-export core types for convenience
pub use client::StoreClient;
pub use client_trait::ResourceClient;
pub use error::StoreError;
pub use field::{ErrorList, FieldError, FieldPath};
pub use message::{ObjectKey, Persisted, Response, StoreRequest};
pub use object::{ObjectMeta, Resource};
pub use store::ResourceStore;
pub use strategy::LifecycleStrategy;
