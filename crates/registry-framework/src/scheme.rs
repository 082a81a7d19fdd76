//! # Object Typing
//!
//! The [`ObjectTyper`] answers "which registered kind is this value?". The
//! store uses it to label requests; strategies only carry it as a capability.
//!
//! [`Scheme`] is the kind-keyed registry behind it. Kinds are registered once
//! at startup and the scheme is shared read-only afterwards.

use crate::object::{GroupVersionKind, Resource};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Reports the registered kind of an object.
pub trait ObjectTyper: Send + Sync {
    /// The kind of `obj`, or `None` if its type was never registered.
    fn object_kind(&self, obj: &dyn Any) -> Option<GroupVersionKind>;

    /// Whether any registered type maps to `gvk`.
    fn recognizes(&self, gvk: &GroupVersionKind) -> bool;
}

/// Registry of Rust types to the kinds they represent.
#[derive(Debug, Default, Clone)]
pub struct Scheme {
    kinds: HashMap<TypeId, GroupVersionKind>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its own `GroupVersionKind`. Re-registering is a no-op.
    pub fn register<T: Resource>(&mut self) -> &mut Self {
        self.kinds.insert(TypeId::of::<T>(), T::gvk());
        self
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl ObjectTyper for Scheme {
    fn object_kind(&self, obj: &dyn Any) -> Option<GroupVersionKind> {
        self.kinds.get(&Any::type_id(obj)).cloned()
    }

    fn recognizes(&self, gvk: &GroupVersionKind) -> bool {
        self.kinds.values().any(|known| known == gvk)
    }
}
