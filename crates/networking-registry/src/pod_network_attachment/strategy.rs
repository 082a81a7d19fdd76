use crate::model::PodNetworkAttachment;
use crate::validation::{validate_pod_network_attachment, validate_pod_network_attachment_update};
use registry_framework::field::ErrorList;
use registry_framework::names::NameGenerator;
use registry_framework::scheme::ObjectTyper;
use registry_framework::LifecycleStrategy;
use std::sync::Arc;

/// Lifecycle policy for `PodNetworkAttachment` objects.
///
/// Same policy shape as [`PodNetworkStrategy`](crate::pod_network::PodNetworkStrategy):
/// cluster-scoped, no-op prepare and canonicalize hooks, unconditional
/// updates allowed, no create-on-update.
pub struct PodNetworkAttachmentStrategy {
    typer: Arc<dyn ObjectTyper>,
    names: Arc<dyn NameGenerator>,
}

impl PodNetworkAttachmentStrategy {
    pub fn new(typer: Arc<dyn ObjectTyper>, names: Arc<dyn NameGenerator>) -> Self {
        Self { typer, names }
    }
}

impl LifecycleStrategy for PodNetworkAttachmentStrategy {
    type Object = PodNetworkAttachment;

    fn object_typer(&self) -> &dyn ObjectTyper {
        self.typer.as_ref()
    }

    fn name_generator(&self) -> &dyn NameGenerator {
        self.names.as_ref()
    }

    fn namespace_scoped(&self) -> bool {
        false
    }

    fn validate(&self, obj: &PodNetworkAttachment) -> ErrorList {
        validate_pod_network_attachment(obj)
    }

    fn validate_update(&self, obj: &PodNetworkAttachment, old: &PodNetworkAttachment) -> ErrorList {
        let mut errs = validate_pod_network_attachment(obj);
        errs.append(validate_pod_network_attachment_update(obj, old));
        errs
    }

    fn allow_create_on_update(&self) -> bool {
        false
    }

    fn allow_unconditional_update(&self) -> bool {
        true
    }
}
