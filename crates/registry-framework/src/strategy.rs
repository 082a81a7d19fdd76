//! # LifecycleStrategy Trait
//!
//! The `LifecycleStrategy` trait is the contract every resource kind implements
//! to be stored by the generic [`ResourceStore`](crate::store::ResourceStore).
//! The store knows nothing about a kind's schema; at fixed points of a create
//! or update request it calls back into the kind's strategy to prepare,
//! validate and normalize the object.
//!
//! # Architecture Note
//! The store's request handling is written *once* and reused for every kind.
//! The associated `Object` type pins each strategy to exactly one kind, so a
//! `PodNetwork` strategy can never be handed a `PodNetworkAttachment`; the
//! compiler rules that mistake out instead of a runtime type check.
//!
//! # Hook Order
//!
//! | Request | Sequence |
//! |---|---|
//! | Create | `prepare_for_create` → `validate` → `canonicalize` → persist → `warnings_on_create` |
//! | Update | `prepare_for_update` → `validate_update` → `canonicalize` → persist → `warnings_on_update` |
//!
//! A non-empty [`ErrorList`] from either validation hook aborts the request
//! before anything is persisted.
//!
//! # Provided Methods (Hooks)
//! `prepare_for_create`, `prepare_for_update`, `canonicalize` and the warning
//! hooks default to doing nothing. Override them only when a kind has
//! server-managed fields or a canonical form.
//!
//! # Statelessness
//! Every hook takes `&self`. A strategy is built once at startup, shared
//! behind an `Arc`, and may be called from many tasks at the same time.

use crate::field::ErrorList;
use crate::names::NameGenerator;
use crate::object::Resource;
use crate::scheme::ObjectTyper;

/// Per-kind policy consulted by the generic store.
pub trait LifecycleStrategy: Send + Sync + 'static {
    /// The kind this strategy governs.
    type Object: Resource;

    /// The object-type oracle injected at construction.
    fn object_typer(&self) -> &dyn ObjectTyper;

    /// The name generator injected at construction.
    fn name_generator(&self) -> &dyn NameGenerator;

    /// Whether objects of this kind live inside a namespace. Cluster-scoped
    /// kinds are identified by name alone.
    fn namespace_scoped(&self) -> bool;

    /// Strips or defaults server-managed fields before validation on create.
    fn prepare_for_create(&self, _obj: &mut Self::Object) {}

    /// Carries server-managed fields from `old` into `obj` before validation
    /// on update.
    fn prepare_for_update(&self, _obj: &mut Self::Object, _old: &Self::Object) {}

    /// Validates a candidate object. Returns every violation found.
    fn validate(&self, obj: &Self::Object) -> ErrorList;

    /// Validates `obj` as a replacement for `old`: the create checks on `obj`
    /// followed by the update-only checks. Never short-circuits.
    fn validate_update(&self, obj: &Self::Object, old: &Self::Object) -> ErrorList;

    /// Advisory messages returned alongside a successful create.
    fn warnings_on_create(&self, _obj: &Self::Object) -> Vec<String> {
        Vec::new()
    }

    /// Advisory messages returned alongside a successful update.
    fn warnings_on_update(&self, _obj: &Self::Object, _old: &Self::Object) -> Vec<String> {
        Vec::new()
    }

    /// Normalizes an object that passed validation, before it is persisted.
    fn canonicalize(&self, _obj: &mut Self::Object) {}

    /// Whether an update naming a missing object may create it.
    fn allow_create_on_update(&self) -> bool;

    /// Whether updates may omit the `resourceVersion` precondition.
    fn allow_unconditional_update(&self) -> bool;

    /// Generates a unique name from a `generateName` base.
    fn generate_name(&self, base: &str) -> String {
        self.name_generator().generate_name(base)
    }
}
