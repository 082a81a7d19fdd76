//! API types for the `networking.k8s.io/v1alpha1` group.

mod parameters_ref;
mod pod_network;
mod pod_network_attachment;

pub use parameters_ref::*;
pub use pod_network::*;
pub use pod_network_attachment::*;

pub use registry_framework::object::{Condition, ObjectMeta};

pub const GROUP: &str = "networking.k8s.io";
pub const VERSION: &str = "v1alpha1";

/// Registers every kind of this group with `scheme`.
pub fn add_to_scheme(scheme: &mut registry_framework::scheme::Scheme) {
    scheme
        .register::<PodNetwork>()
        .register::<PodNetworkAttachment>();
}
