use super::common::{
    validate_conditions, validate_network_name, validate_parameters_refs, validate_provider,
};
use crate::model::PodNetwork;
use registry_framework::field::{ErrorList, FieldPath};
use registry_framework::validation::{
    validate_immutable_field, validate_object_meta, validate_object_meta_update,
};

/// Validates a `PodNetwork` on create, and as the first half of an update.
pub fn validate_pod_network(pn: &PodNetwork) -> ErrorList {
    let mut errs = validate_object_meta(
        &pn.metadata,
        false,
        validate_network_name,
        &FieldPath::new("metadata"),
    );

    let spec = FieldPath::new("spec");
    errs.append(validate_provider(&pn.spec.provider, &spec.child("provider")));
    errs.append(validate_parameters_refs(
        &pn.spec.parameters_refs,
        &spec.child("parametersRefs"),
    ));
    errs.append(validate_conditions(
        &pn.status.conditions,
        &FieldPath::new("status").child("conditions"),
    ));
    errs
}

/// The checks that only make sense against the stored object.
pub fn validate_pod_network_update(new: &PodNetwork, old: &PodNetwork) -> ErrorList {
    let mut errs = validate_object_meta_update(
        &new.metadata,
        &old.metadata,
        &FieldPath::new("metadata"),
    );
    errs.append(validate_immutable_field(
        new.spec.provider.as_str(),
        old.spec.provider.as_str(),
        &FieldPath::new("spec").child("provider"),
    ));
    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParametersRef;
    use registry_framework::field::ErrorType;

    #[test]
    fn test_valid_pod_network() {
        let mut pn = PodNetwork::new("default", "example.com/macvlan");
        pn.spec
            .parameters_refs
            .push(ParametersRef::new("example.com", "MacvlanConfig", "eth1"));
        assert!(validate_pod_network(&pn).is_empty());
        assert!(validate_pod_network(&PodNetwork::new("no-provider", "")).is_empty());
    }

    #[test]
    fn test_invalid_pod_network_reports_everything() {
        let mut pn = PodNetwork::new("Default", "bad provider");
        pn.spec.parameters_refs.push(ParametersRef::default());

        let errs = validate_pod_network(&pn);
        assert!(errs.has_field("metadata.name"));
        assert!(errs.has_field("spec.provider"));
        assert!(errs.has_field("spec.parametersRefs[0].kind"));
        assert!(errs.has_field("spec.parametersRefs[0].name"));
    }

    #[test]
    fn test_provider_is_immutable() {
        let old = PodNetwork::new("default", "a.example.com/p");
        let new = PodNetwork::new("default", "b.example.com/p");

        assert!(validate_pod_network(&new).is_empty());
        let errs = validate_pod_network_update(&new, &old);
        assert_eq!(errs.len(), 1);
        let err = errs.iter().next().unwrap();
        assert_eq!(err.field, "spec.provider");
        assert_eq!(err.error_type, ErrorType::Immutable);
    }

    #[test]
    fn test_enabled_and_refs_are_mutable() {
        let old = PodNetwork::new("default", "example.com/p");
        let mut new = old.clone();
        new.spec.enabled = false;
        new.spec
            .parameters_refs
            .push(ParametersRef::new("", "ConfigMap", "cfg").in_namespace("kube-system"));
        assert!(validate_pod_network_update(&new, &old).is_empty());
    }
}
