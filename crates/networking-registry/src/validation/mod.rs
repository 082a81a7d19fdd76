//! # Field Validation
//!
//! Kind validators for the `networking.k8s.io` group. Every function returns
//! the complete [`ErrorList`](registry_framework::ErrorList) for its input;
//! none stops at the first problem. The strategies call these and pass the
//! result to the store untouched.

mod common;
mod pod_network;
mod pod_network_attachment;

pub use common::*;
pub use pod_network::*;
pub use pod_network_attachment::*;
