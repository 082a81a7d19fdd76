use super::ParametersRef;
use registry_framework::object::{self, Condition, ObjectMeta, Resource};
use serde::{Deserialize, Serialize};

/// A network that pods can be attached to.
///
/// # Registry
/// Stored by a [`ResourceStore`](registry_framework::ResourceStore) driven by
/// [`PodNetworkStrategy`](crate::pod_network::PodNetworkStrategy). The kind
/// is cluster-scoped: names are unique across the whole registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodNetwork {
    pub metadata: ObjectMeta,
    pub spec: PodNetworkSpec,
    pub status: PodNetworkStatus,
}

/// Desired state of a [`PodNetwork`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodNetworkSpec {
    /// Whether new attachments to this network are allowed.
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters_refs: Vec<ParametersRef>,
    /// The implementation serving this network. Fixed once set.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodNetworkStatus {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Resource for PodNetwork {
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "PodNetwork";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl PodNetwork {
    /// Creates an enabled network with the given name and provider.
    ///
    /// # Notes
    /// System fields (`uid`, `resourceVersion`, ...) are left empty and are
    /// set by the store.
    pub fn new(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            metadata: object::named(name),
            spec: PodNetworkSpec {
                enabled: true,
                parameters_refs: Vec::new(),
                provider: provider.into(),
            },
            status: PodNetworkStatus::default(),
        }
    }
}
