use super::common::{validate_conditions, validate_network_name, validate_parameters_refs};
use crate::model::PodNetworkAttachment;
use registry_framework::field::{ErrorList, FieldError, FieldPath};
use registry_framework::validation::{
    is_dns1123_label, validate_immutable_field, validate_object_meta, validate_object_meta_update,
};

/// Validates a `PodNetworkAttachment` on create, and as the first half of an update.
pub fn validate_pod_network_attachment(pna: &PodNetworkAttachment) -> ErrorList {
    let mut errs = validate_object_meta(
        &pna.metadata,
        false,
        validate_network_name,
        &FieldPath::new("metadata"),
    );

    let spec = FieldPath::new("spec");
    let network = spec.child("podNetworkName");
    if pna.spec.pod_network_name.is_empty() {
        errs.push(FieldError::required(&network, ""));
    } else {
        for msg in is_dns1123_label(&pna.spec.pod_network_name) {
            errs.push(FieldError::invalid(
                &network,
                &pna.spec.pod_network_name,
                msg,
            ));
        }
    }

    errs.append(validate_parameters_refs(
        &pna.spec.parameters_refs,
        &spec.child("parametersRefs"),
    ));
    errs.append(validate_conditions(
        &pna.status.conditions,
        &FieldPath::new("status").child("conditions"),
    ));
    errs
}

/// The checks that only make sense against the stored object.
pub fn validate_pod_network_attachment_update(
    new: &PodNetworkAttachment,
    old: &PodNetworkAttachment,
) -> ErrorList {
    let mut errs = validate_object_meta_update(
        &new.metadata,
        &old.metadata,
        &FieldPath::new("metadata"),
    );
    errs.append(validate_immutable_field(
        new.spec.pod_network_name.as_str(),
        old.spec.pod_network_name.as_str(),
        &FieldPath::new("spec").child("podNetworkName"),
    ));
    errs
}
