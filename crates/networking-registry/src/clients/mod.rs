//! Typed clients, one per kind.

mod pod_network_attachment_client;
mod pod_network_client;

pub use pod_network_attachment_client::PodNetworkAttachmentClient;
pub use pod_network_client::PodNetworkClient;
pub use registry_framework::ResourceClient;
