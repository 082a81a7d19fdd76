//! # Generic Messages
//!
//! This module defines the request types exchanged between the
//! [`StoreClient`](crate::client::StoreClient) and the
//! [`ResourceStore`](crate::store::ResourceStore).

use crate::error::StoreError;
use crate::strategy::LifecycleStrategy;
use std::fmt::{self, Display};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A successfully persisted object plus the strategy's advisory warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Persisted<T> {
    pub object: T,
    pub warnings: Vec<String>,
}

/// Identifies a stored object: its name, plus its namespace for namespaced kinds.
///
/// Cluster-scoped stores ignore the namespace. A bare name converts into a
/// key with no namespace, so `client.get("default")` reads naturally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    pub namespace: Option<String>,
    pub name: String,
}

impl ObjectKey {
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }
}

impl From<String> for ObjectKey {
    fn from(name: String) -> Self {
        Self {
            namespace: None,
            name,
        }
    }
}

impl From<&str> for ObjectKey {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<&String> for ObjectKey {
    fn from(name: &String) -> Self {
        Self::from(name.clone())
    }
}

impl Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}/{}", namespace, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Request sent to a store task.
///
/// The variants map to the storage verbs a declarative API exposes. Create
/// and Update are the two that run the strategy's lifecycle hooks.
///
/// This type is generic over `S: LifecycleStrategy`, so a request carrying
/// one kind's object can only ever reach that kind's store.
#[derive(Debug)]
pub enum StoreRequest<S: LifecycleStrategy> {
    Create {
        object: S::Object,
        respond_to: Response<Persisted<S::Object>>,
    },
    Get {
        key: ObjectKey,
        respond_to: Response<Option<S::Object>>,
    },
    List {
        respond_to: Response<Vec<S::Object>>,
    },
    Update {
        object: S::Object,
        respond_to: Response<Persisted<S::Object>>,
    },
    Delete {
        key: ObjectKey,
        respond_to: Response<S::Object>,
    },
}
