//! # Generic Resource Store
//!
//! This module defines the `ResourceStore`, the generic storage layer that
//! drives a [`LifecycleStrategy`] through an object's create and update
//! lifecycle. It is the "server" side: it owns the objects of one kind and
//! processes requests sequentially, so two requests for the same kind never
//! interleave.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::field::{ErrorList, FieldError, FieldPath};
use crate::message::{ObjectKey, Persisted, StoreRequest};
use crate::object::{ObjectMeta, Resource, Time};
use crate::strategy::LifecycleStrategy;
use jiff::Timestamp;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The generic store that persists objects of the kind governed by `S`.
///
/// # Architecture Note
/// The store owns its map and the receiver end of the channel. Each store
/// runs in its own Tokio task and handles one request at a time, so the map
/// needs no `Mutex`. Concurrency between callers is resolved by channel
/// order; concurrency between *stale* writers is resolved by the
/// `resourceVersion` precondition.
///
/// # Usage Pattern
///
/// ```rust
/// use registry_framework::field::ErrorList;
/// use registry_framework::names::{NameGenerator, SimpleNameGenerator};
/// use registry_framework::object::{self, ObjectMeta, Resource};
/// use registry_framework::scheme::{ObjectTyper, Scheme};
/// use registry_framework::{LifecycleStrategy, ResourceStore};
/// use serde::Serialize;
/// use std::sync::Arc;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct Widget { metadata: ObjectMeta }
///
/// impl Resource for Widget {
///     const GROUP: &'static str = "example.io";
///     const VERSION: &'static str = "v1";
///     const KIND: &'static str = "Widget";
///     fn metadata(&self) -> &ObjectMeta { &self.metadata }
///     fn metadata_mut(&mut self) -> &mut ObjectMeta { &mut self.metadata }
/// }
///
/// struct WidgetStrategy { scheme: Scheme }
///
/// impl LifecycleStrategy for WidgetStrategy {
///     type Object = Widget;
///     fn object_typer(&self) -> &dyn ObjectTyper { &self.scheme }
///     fn name_generator(&self) -> &dyn NameGenerator { &SimpleNameGenerator }
///     fn namespace_scoped(&self) -> bool { false }
///     fn validate(&self, _: &Widget) -> ErrorList { ErrorList::new() }
///     fn validate_update(&self, _: &Widget, _: &Widget) -> ErrorList { ErrorList::new() }
///     fn allow_create_on_update(&self) -> bool { false }
///     fn allow_unconditional_update(&self) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut scheme = Scheme::new();
///     scheme.register::<Widget>();
///
///     // 1. Create
///     let (store, client) = ResourceStore::new(Arc::new(WidgetStrategy { scheme }), 10);
///
///     // 2. Run
///     tokio::spawn(store.run());
///
///     // 3. Use
///     let created = client
///         .create(Widget { metadata: object::generated("widget-") })
///         .await
///         .unwrap();
///     assert!(created.object.name().starts_with("widget-"));
/// }
/// ```
///
/// # Operations
///
/// * **Create**:
///     1. Clears the namespace of cluster-scoped kinds.
///     2. Calls `prepare_for_create`.
///     3. Fills system fields (`uid`, `creationTimestamp`, `generation`).
///     4. Generates a name from `generateName` when `name` is empty.
///     5. Calls `validate`; any error aborts the request.
///     6. Calls `canonicalize`, checks the name is free, assigns a revision
///        and persists.
///     7. Returns the object with `warnings_on_create`.
///
/// * **Update**:
///     1. Looks up the stored object. Missing objects are only created when
///        `allow_create_on_update` says so; otherwise the request is Forbidden.
///     2. Checks the `resourceVersion` precondition (optional when
///        `allow_unconditional_update`).
///     3. Carries system fields over, calls `prepare_for_update`.
///     4. Calls `validate_update`; any error aborts with the stored object untouched.
///     5. Calls `canonicalize`, bumps `generation` on spec changes, assigns a
///        revision and persists.
///     6. Returns the object with `warnings_on_update`.
pub struct ResourceStore<S: LifecycleStrategy> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    strategy: Arc<S>,
    objects: BTreeMap<String, S::Object>,
    revision: u64,
}

impl<S: LifecycleStrategy> ResourceStore<S> {
    /// Creates a new `ResourceStore` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The kind's lifecycle policy, shared for the life of the process.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(strategy: Arc<S>, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            strategy,
            objects: BTreeMap::new(),
            revision: 0,
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the store's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        let kind = <S::Object as Resource>::KIND;
        info!(kind, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { object, respond_to } => {
                    debug!(kind, ?object, "Create");
                    let _ = respond_to.send(self.create(object));
                }
                StoreRequest::Get { key, respond_to } => {
                    let key = self.lookup_key(&key);
                    let item = self.objects.get(&key).cloned();
                    debug!(kind, %key, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(kind, size = self.objects.len(), "List");
                    let _ = respond_to.send(Ok(self.objects.values().cloned().collect()));
                }
                StoreRequest::Update { object, respond_to } => {
                    debug!(kind, ?object, "Update");
                    let _ = respond_to.send(self.update(object));
                }
                StoreRequest::Delete { key, respond_to } => {
                    debug!(kind, %key, "Delete");
                    let _ = respond_to.send(self.delete(&key));
                }
            }
        }

        info!(kind, size = self.objects.len(), "Shutdown");
    }

    fn create(&mut self, mut obj: S::Object) -> Result<Persisted<S::Object>, StoreError> {
        let kind = self.kind_of(&obj)?;

        if !self.strategy.namespace_scoped() {
            obj.metadata_mut().namespace = None;
        }
        self.strategy.prepare_for_create(&mut obj);
        fill_system_fields(obj.metadata_mut());

        if obj.name().is_empty() {
            let base = obj.metadata().generate_name.clone().unwrap_or_default();
            if !base.is_empty() {
                let name = self.strategy.generate_name(&base);
                debug!(%kind, %name, "Generated name");
                obj.metadata_mut().name = Some(name);
            }
        }

        let errors = self.strategy.validate(&obj);
        if !errors.is_empty() {
            warn!(%kind, name = obj.name(), %errors, "Create rejected");
            return Err(StoreError::Invalid {
                kind,
                name: obj.name().to_string(),
                errors,
            });
        }

        self.strategy.canonicalize(&mut obj);

        let key = self.key(obj.metadata());
        if self.objects.contains_key(&key) {
            warn!(%kind, %key, "Already exists");
            return Err(StoreError::AlreadyExists { kind, name: key });
        }

        obj.metadata_mut().resource_version = Some(self.next_revision());
        self.objects.insert(key, obj.clone());
        info!(
            %kind,
            name = obj.name(),
            revision = %obj.resource_version(),
            size = self.objects.len(),
            "Created"
        );

        let warnings = self.strategy.warnings_on_create(&obj);
        Ok(Persisted {
            object: obj,
            warnings,
        })
    }

    fn update(&mut self, mut obj: S::Object) -> Result<Persisted<S::Object>, StoreError> {
        let kind = self.kind_of(&obj)?;

        if !self.strategy.namespace_scoped() {
            obj.metadata_mut().namespace = None;
        }
        let key = self.key(obj.metadata());

        let Some(old) = self.objects.get(&key).cloned() else {
            if self.strategy.allow_create_on_update() {
                debug!(%kind, %key, "Creating on update");
                return self.create(obj);
            }
            warn!(%kind, %key, "Update of missing object");
            return Err(StoreError::Forbidden {
                kind,
                name: key,
                reason: "the object does not exist and cannot be created by an update".into(),
            });
        };

        self.check_precondition(&kind, &obj, &old)?;

        carry_system_fields(obj.metadata_mut(), old.metadata());
        self.strategy.prepare_for_update(&mut obj, &old);

        let errors = self.strategy.validate_update(&obj, &old);
        if !errors.is_empty() {
            warn!(%kind, %key, %errors, "Update rejected");
            return Err(StoreError::Invalid {
                kind,
                name: key,
                errors,
            });
        }

        self.strategy.canonicalize(&mut obj);

        if spec_changed(&obj, &old) {
            let generation = obj.generation().saturating_add(1);
            obj.metadata_mut().generation = Some(generation);
        }
        obj.metadata_mut().resource_version = Some(self.next_revision());
        self.objects.insert(key, obj.clone());
        info!(
            %kind,
            name = obj.name(),
            revision = %obj.resource_version(),
            generation = obj.generation(),
            "Updated"
        );

        let warnings = self.strategy.warnings_on_update(&obj, &old);
        Ok(Persisted {
            object: obj,
            warnings,
        })
    }

    fn delete(&mut self, key: &ObjectKey) -> Result<S::Object, StoreError> {
        let kind = <S::Object as Resource>::KIND;
        let key = self.lookup_key(key);
        match self.objects.remove(&key) {
            Some(obj) => {
                info!(kind, %key, size = self.objects.len(), "Deleted");
                Ok(obj)
            }
            None => {
                warn!(kind, %key, "Not found");
                Err(StoreError::NotFound {
                    kind: kind.to_string(),
                    name: key,
                })
            }
        }
    }

    fn check_precondition(
        &self,
        kind: &str,
        obj: &S::Object,
        old: &S::Object,
    ) -> Result<(), StoreError> {
        let requested = obj.resource_version();
        if requested.is_empty() {
            if self.strategy.allow_unconditional_update() {
                return Ok(());
            }
            let mut errors = ErrorList::new();
            errors.push(FieldError::required(
                &FieldPath::new("metadata").child("resourceVersion"),
                "must be specified for an update",
            ));
            return Err(StoreError::Invalid {
                kind: kind.to_string(),
                name: obj.name().to_string(),
                errors,
            });
        }
        if requested != old.resource_version() {
            warn!(kind, name = obj.name(), requested, "Stale resourceVersion");
            return Err(StoreError::Conflict {
                kind: kind.to_string(),
                name: obj.name().to_string(),
                reason: "the object has been modified; please apply your changes to the latest \
                         version and try again"
                    .into(),
            });
        }
        Ok(())
    }

    /// The kind the strategy's object-type oracle reports for `obj`.
    fn kind_of(&self, obj: &S::Object) -> Result<String, StoreError> {
        self.strategy
            .object_typer()
            .object_kind(obj)
            .map(|gvk| gvk.kind)
            .ok_or_else(|| StoreError::NotRegistered(std::any::type_name::<S::Object>().into()))
    }

    /// Storage key: the name, qualified by namespace only for namespaced kinds.
    fn key(&self, meta: &ObjectMeta) -> String {
        self.storage_key(
            meta.namespace.as_deref().unwrap_or_default(),
            meta.name.as_deref().unwrap_or_default(),
        )
    }

    /// The storage key a get or delete request addresses.
    fn lookup_key(&self, key: &ObjectKey) -> String {
        self.storage_key(key.namespace.as_deref().unwrap_or_default(), &key.name)
    }

    fn storage_key(&self, namespace: &str, name: &str) -> String {
        if self.strategy.namespace_scoped() {
            format!("{}/{}", namespace, name)
        } else {
            name.to_string()
        }
    }

    fn next_revision(&mut self) -> String {
        self.revision = self.revision.saturating_add(1);
        self.revision.to_string()
    }
}

fn fill_system_fields(meta: &mut ObjectMeta) {
    meta.uid = Some(Uuid::new_v4().to_string());
    meta.creation_timestamp = Some(Time(Timestamp::now()));
    meta.resource_version = None;
    meta.generation = Some(1);
}

fn carry_system_fields(meta: &mut ObjectMeta, old: &ObjectMeta) {
    meta.generation = old.generation;
    if meta.uid.as_deref().unwrap_or_default().is_empty() {
        meta.uid = old.uid.clone();
    }
    if old.creation_timestamp.is_some() {
        meta.creation_timestamp = old.creation_timestamp.clone();
    }
}

/// Whether anything outside `metadata` and `status` differs.
fn spec_changed<T: Resource>(new: &T, old: &T) -> bool {
    fn without_meta(value: serde_json::Value) -> serde_json::Value {
        match value {
            serde_json::Value::Object(mut map) => {
                map.remove("metadata");
                map.remove("status");
                serde_json::Value::Object(map)
            }
            other => other,
        }
    }
    let new = serde_json::to_value(new).ok().map(without_meta);
    let old = serde_json::to_value(old).ok().map(without_meta);
    new != old
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{NameGenerator, SimpleNameGenerator};
    use crate::object;
    use crate::scheme::{ObjectTyper, Scheme};
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Note {
        metadata: ObjectMeta,
        text: String,
        status: String,
    }

    impl Resource for Note {
        const GROUP: &'static str = "example.io";
        const VERSION: &'static str = "v1";
        const KIND: &'static str = "Note";

        fn metadata(&self) -> &ObjectMeta {
            &self.metadata
        }

        fn metadata_mut(&mut self) -> &mut ObjectMeta {
            &mut self.metadata
        }
    }

    fn note(name: &str, text: &str) -> Note {
        Note {
            metadata: object::named(name),
            text: text.into(),
            status: String::new(),
        }
    }

    struct NoteStrategy {
        scheme: Scheme,
        namespaced: bool,
        unconditional: bool,
        create_on_update: bool,
    }

    impl NoteStrategy {
        fn new() -> Self {
            let mut scheme = Scheme::new();
            scheme.register::<Note>();
            Self {
                scheme,
                namespaced: false,
                unconditional: true,
                create_on_update: false,
            }
        }
    }

    impl LifecycleStrategy for NoteStrategy {
        type Object = Note;

        fn object_typer(&self) -> &dyn ObjectTyper {
            &self.scheme
        }

        fn name_generator(&self) -> &dyn NameGenerator {
            &SimpleNameGenerator
        }

        fn namespace_scoped(&self) -> bool {
            self.namespaced
        }

        fn validate(&self, obj: &Note) -> ErrorList {
            let mut errs = ErrorList::new();
            if obj.text.is_empty() {
                errs.push(FieldError::required(&FieldPath::new("text"), ""));
            }
            errs
        }

        fn validate_update(&self, obj: &Note, old: &Note) -> ErrorList {
            let mut errs = self.validate(obj);
            if obj.text.starts_with('!') != old.text.starts_with('!') {
                errs.push(FieldError::immutable(&FieldPath::new("text"), &obj.text));
            }
            errs
        }

        fn allow_create_on_update(&self) -> bool {
            self.create_on_update
        }

        fn allow_unconditional_update(&self) -> bool {
            self.unconditional
        }
    }

    fn store(strategy: NoteStrategy) -> ResourceStore<NoteStrategy> {
        ResourceStore::new(Arc::new(strategy), 4).0
    }

    #[test]
    fn test_create_fills_system_fields() {
        let mut store = store(NoteStrategy::new());
        let mut input = note("a", "hello");
        input.metadata.namespace = Some("ignored".into());
        input.metadata.uid = Some("caller-uid".into());
        input.metadata.resource_version = Some("99".into());

        let created = store.create(input).unwrap().object;
        assert_eq!(created.metadata.namespace, None);
        assert_ne!(created.uid(), "caller-uid");
        assert!(!created.uid().is_empty());
        assert_eq!(created.resource_version(), "1");
        assert_eq!(created.metadata.generation, Some(1));
        assert!(created.metadata.creation_timestamp.is_some());
    }

    #[test]
    fn test_create_rejects_invalid_without_persisting() {
        let mut store = store(NoteStrategy::new());
        let err = store.create(note("a", "")).unwrap_err();
        assert!(err.field_errors().unwrap().has_field("text"));
        assert!(store.objects.is_empty());
        assert_eq!(store.revision, 0);
    }

    #[test]
    fn test_create_duplicate_name() {
        let mut store = store(NoteStrategy::new());
        store.create(note("a", "one")).unwrap();
        let err = store.create(note("a", "two")).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { ref name, .. } if name == "a"));
    }

    #[test]
    fn test_update_missing_is_forbidden() {
        let mut store = store(NoteStrategy::new());
        let err = store.update(note("ghost", "boo")).unwrap_err();
        assert!(matches!(err, StoreError::Forbidden { .. }));
        assert!(store.objects.is_empty());
    }

    #[test]
    fn test_update_missing_creates_when_allowed() {
        let mut strategy = NoteStrategy::new();
        strategy.create_on_update = true;
        let mut store = store(strategy);
        let created = store.update(note("new", "text")).unwrap().object;
        assert_eq!(created.resource_version(), "1");
        assert!(store.objects.contains_key("new"));
    }

    #[test]
    fn test_update_preconditions() {
        let mut strategy = NoteStrategy::new();
        strategy.unconditional = false;
        let mut store = store(strategy);
        store.create(note("a", "one")).unwrap();

        let err = store.update(note("a", "two")).unwrap_err();
        assert!(err
            .field_errors()
            .unwrap()
            .has_field("metadata.resourceVersion"));

        let mut stale = note("a", "two");
        stale.metadata.resource_version = Some("0".into());
        assert!(matches!(
            store.update(stale).unwrap_err(),
            StoreError::Conflict { .. }
        ));

        let mut current = note("a", "two");
        current.metadata.resource_version = Some("1".into());
        let updated = store.update(current).unwrap().object;
        assert_eq!(updated.resource_version(), "2");
    }

    #[test]
    fn test_update_keeps_identity_and_bumps_generation_on_spec_change() {
        let mut store = store(NoteStrategy::new());
        let created = store.create(note("a", "one")).unwrap().object;

        let mut status_only = created.clone();
        status_only.metadata.resource_version = None;
        status_only.metadata.uid = None;
        status_only.status = "Ready".into();
        let updated = store.update(status_only).unwrap().object;
        assert_eq!(updated.uid(), created.uid());
        assert_eq!(updated.metadata.creation_timestamp, created.metadata.creation_timestamp);
        assert_eq!(updated.generation(), 1);

        let spec_change = note("a", "two");
        let updated = store.update(spec_change).unwrap().object;
        assert_eq!(updated.generation(), 2);
    }

    #[test]
    fn test_rejected_update_leaves_stored_object() {
        let mut store = store(NoteStrategy::new());
        let created = store.create(note("a", "one")).unwrap().object;

        let err = store.update(note("a", "!one")).unwrap_err();
        assert_eq!(err.field_errors().unwrap().len(), 1);
        assert_eq!(store.objects.get("a"), Some(&created));
    }

    #[test]
    fn test_unregistered_kind() {
        let strategy = NoteStrategy {
            scheme: Scheme::new(),
            namespaced: false,
            unconditional: true,
            create_on_update: false,
        };
        let mut store = store(strategy);
        assert!(matches!(
            store.create(note("a", "x")).unwrap_err(),
            StoreError::NotRegistered(_)
        ));
    }

    #[test]
    fn test_delete() {
        let mut store = store(NoteStrategy::new());
        store.create(note("a", "x")).unwrap();
        assert_eq!(store.delete(&ObjectKey::from("a")).unwrap().text, "x");
        assert!(matches!(
            store.delete(&ObjectKey::from("a")).unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn test_namespaced_kind_is_addressed_by_namespace_and_name() {
        let mut strategy = NoteStrategy::new();
        strategy.namespaced = true;
        let mut store = store(strategy);

        let mut first = note("x", "one");
        first.metadata.namespace = Some("a".into());
        let mut second = note("x", "two");
        second.metadata.namespace = Some("b".into());
        store.create(first).unwrap();
        store.create(second).unwrap();
        assert_eq!(store.objects.len(), 2);

        let key = ObjectKey::namespaced("a", "x");
        assert_eq!(store.objects.get(&store.lookup_key(&key)).unwrap().text, "one");
        assert!(!store.objects.contains_key(&store.lookup_key(&ObjectKey::from("x"))));

        assert_eq!(store.delete(&key).unwrap().text, "one");
        assert!(matches!(
            store.delete(&key).unwrap_err(),
            StoreError::NotFound { ref name, .. } if name == "a/x"
        ));
        assert_eq!(store.objects.len(), 1);
    }

    #[test]
    fn test_cluster_scoped_kind_ignores_key_namespace() {
        let mut store = store(NoteStrategy::new());
        store.create(note("x", "one")).unwrap();
        let key = ObjectKey::namespaced("anything", "x");
        assert_eq!(store.lookup_key(&key), "x");
        assert_eq!(store.delete(&key).unwrap().text, "one");
    }
}
