use crate::model::PodNetwork;
use crate::validation::{validate_pod_network, validate_pod_network_update};
use registry_framework::field::ErrorList;
use registry_framework::names::NameGenerator;
use registry_framework::scheme::ObjectTyper;
use registry_framework::LifecycleStrategy;
use std::sync::Arc;

/// Lifecycle policy for `PodNetwork` objects.
///
/// PodNetworks are cluster-scoped and have no server-managed spec fields, so
/// the prepare, canonicalize and warning hooks keep their no-op defaults.
/// Updates without a `resourceVersion` are accepted; updates of a missing
/// network are not turned into creates.
pub struct PodNetworkStrategy {
    typer: Arc<dyn ObjectTyper>,
    names: Arc<dyn NameGenerator>,
}

impl PodNetworkStrategy {
    pub fn new(typer: Arc<dyn ObjectTyper>, names: Arc<dyn NameGenerator>) -> Self {
        Self { typer, names }
    }
}

impl LifecycleStrategy for PodNetworkStrategy {
    type Object = PodNetwork;

    fn object_typer(&self) -> &dyn ObjectTyper {
        self.typer.as_ref()
    }

    fn name_generator(&self) -> &dyn NameGenerator {
        self.names.as_ref()
    }

    fn namespace_scoped(&self) -> bool {
        false
    }

    fn validate(&self, obj: &PodNetwork) -> ErrorList {
        validate_pod_network(obj)
    }

    fn validate_update(&self, obj: &PodNetwork, old: &PodNetwork) -> ErrorList {
        let mut errs = validate_pod_network(obj);
        errs.append(validate_pod_network_update(obj, old));
        errs
    }

    fn allow_create_on_update(&self) -> bool {
        false
    }

    fn allow_unconditional_update(&self) -> bool {
        true
    }
}
