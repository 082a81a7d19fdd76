//! # Object Metadata
//!
//! Types shared by every stored resource kind: the `GroupVersionKind`
//! identity and the [`Resource`] trait the store uses to reach an object's
//! metadata without knowing the kind's schema.
//!
//! The metadata block itself is the Kubernetes `ObjectMeta` from
//! `k8s-openapi`. The store owns `uid`, `resourceVersion`, `generation` and
//! `creationTimestamp`; whatever a caller puts there on create is replaced.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

/// Identifies a registered kind, e.g. `networking.k8s.io/v1alpha1, Kind=PodNetwork`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }

    /// `group/version`, or just `version` for the core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}

/// Metadata with only a name set.
pub fn named(name: impl Into<String>) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.into()),
        ..Default::default()
    }
}

/// Metadata asking the store to generate a name from `prefix`.
pub fn generated(prefix: impl Into<String>) -> ObjectMeta {
    ObjectMeta {
        generate_name: Some(prefix.into()),
        ..Default::default()
    }
}

/// A status condition, as reported in `status.conditions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    #[serde(default)]
    pub observed_generation: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

/// Accessors every stored kind provides to the generic store.
///
/// The store only ever touches metadata through this trait. Everything else
/// about an object is the business of the kind's strategy.
pub trait Resource: Clone + Debug + Serialize + Send + Sync + 'static {
    const GROUP: &'static str;
    const VERSION: &'static str;
    const KIND: &'static str;

    fn metadata(&self) -> &ObjectMeta;

    fn metadata_mut(&mut self) -> &mut ObjectMeta;

    fn gvk() -> GroupVersionKind {
        GroupVersionKind::new(Self::GROUP, Self::VERSION, Self::KIND)
    }

    /// The name, or `""` when unset.
    fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or_default()
    }

    /// The namespace, or `""` for cluster-scoped objects.
    fn namespace(&self) -> &str {
        self.metadata().namespace.as_deref().unwrap_or_default()
    }

    fn uid(&self) -> &str {
        self.metadata().uid.as_deref().unwrap_or_default()
    }

    /// The store revision this object was read at, or `""` before it is stored.
    fn resource_version(&self) -> &str {
        self.metadata().resource_version.as_deref().unwrap_or_default()
    }

    fn generation(&self) -> i64 {
        self.metadata().generation.unwrap_or_default()
    }
}
