//! # Registry Lifecycle & Orchestration
//!
//! This module builds the per-kind strategies, starts one store per kind and
//! shuts them down again.
//!
//! ## Startup
//!
//! Strategies are plain values constructed exactly once, here, with their
//! collaborators injected:
//!
//! ```rust,ignore
//! let typer: Arc<dyn ObjectTyper> = Arc::new(scheme);
//! let names: Arc<dyn NameGenerator> = Arc::new(SimpleNameGenerator);
//! let strategy = PodNetworkStrategy::new(typer, names);
//! let (store, client) = pod_network::new(Arc::new(strategy), 32);
//! tokio::spawn(store.run());
//! ```
//!
//! There is no global registry of strategies; whoever holds the client can
//! reach the store, and nothing else can.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Stores clean up** - Answer queued requests, log the final object count
//! 4. **Await completion** - Wait for all store tasks to finish
//!
//! ## Observability & Tracing
//!
//! [`init_tracing`] installs the subscriber selected by
//! [`LogFormat`](crate::config::LogFormat). See [`registry_framework::tracing`].
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full objects
//! ```

pub mod registry;

pub use registry::*;

use crate::config::LogFormat;
use registry_framework::tracing::{setup_tracing, setup_tracing_json};

/// Installs the global tracing subscriber for `format`. Call once per process.
pub fn init_tracing(format: LogFormat) {
    match format {
        LogFormat::Compact => setup_tracing(),
        LogFormat::Json => setup_tracing_json(),
    }
}
