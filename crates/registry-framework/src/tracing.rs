//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for every store in the process.
//!
//! ## Overview
//!
//! [`setup_tracing`] installs a compact, human-readable subscriber for
//! development. [`setup_tracing_json`] installs a JSON subscriber whose lines
//! carry the same structured fields, for log pipelines.
//!
//! Both hide the crate/module prefix (`with_target(false)`); the `kind` field
//! already says which store a line came from.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: Startup and shutdown with the final object count
//! - **Requests**: Create, Get, List, Update, Delete
//! - **Rejections**: The full field error list of an invalid object
//! - **Conflicts**: Stale `resourceVersion` preconditions
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full objects with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the generic store
//! RUST_LOG=registry_framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Store started kind="PodNetwork"
//! INFO Created kind="PodNetwork" name="default" revision=1 size=1
//! WARN Update rejected kind="PodNetwork" key="default" errors=spec.provider: Immutable value: "b.io": field is immutable
//! ```

/// Installs the compact development subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact() // Compact format shows spans inline (e.g., "create_pod_network:get")
        .init();
}

/// Installs a JSON subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing_json() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .json()
        .init();
}
