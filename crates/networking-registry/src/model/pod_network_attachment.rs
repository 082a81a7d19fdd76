use super::ParametersRef;
use registry_framework::object::{self, Condition, ObjectMeta, Resource};
use serde::{Deserialize, Serialize};

/// Attaches pods to a [`PodNetwork`](super::PodNetwork) with extra parameters.
///
/// # Registry
/// Stored by a [`ResourceStore`](registry_framework::ResourceStore) driven by
/// [`PodNetworkAttachmentStrategy`](crate::pod_network_attachment::PodNetworkAttachmentStrategy).
/// Cluster-scoped, like the network it points at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodNetworkAttachment {
    pub metadata: ObjectMeta,
    pub spec: PodNetworkAttachmentSpec,
    pub status: PodNetworkAttachmentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodNetworkAttachmentSpec {
    /// Name of the target `PodNetwork`. Fixed once set.
    pub pod_network_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters_refs: Vec<ParametersRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodNetworkAttachmentStatus {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Resource for PodNetworkAttachment {
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "PodNetworkAttachment";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl PodNetworkAttachment {
    /// Creates an attachment named `name` targeting `pod_network_name`.
    pub fn new(name: impl Into<String>, pod_network_name: impl Into<String>) -> Self {
        Self {
            metadata: object::named(name),
            spec: PodNetworkAttachmentSpec {
                pod_network_name: pod_network_name.into(),
                parameters_refs: Vec::new(),
            },
            status: PodNetworkAttachmentStatus::default(),
        }
    }
}
