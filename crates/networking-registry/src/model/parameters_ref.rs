use serde::{Deserialize, Serialize};

/// A reference to an object holding provider-specific parameters.
///
/// `group` and `namespace` are optional; an empty `group` means the core API
/// group, an empty `namespace` means the referent is cluster-scoped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParametersRef {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl ParametersRef {
    /// A cluster-scoped reference.
    pub fn new(group: impl Into<String>, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
            name: name.into(),
            namespace: String::new(),
        }
    }

    /// Sets the referent's namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
