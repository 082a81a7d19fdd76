//! Checks shared by both kinds.

use crate::model::{Condition, ParametersRef};
use registry_framework::field::{ErrorList, FieldError, FieldPath};
use registry_framework::validation::{
    is_condition_reason, is_dns1123_label, is_dns1123_subdomain, is_qualified_name,
    name_is_dns_label, CONDITION_REASON_MAX_LENGTH, DNS1123_SUBDOMAIN_MAX_LENGTH,
};
use std::collections::HashSet;

pub const CONDITION_MESSAGE_MAX_LENGTH: usize = 32768;
pub const CONDITION_STATUSES: &[&str] = &["True", "False", "Unknown"];

/// Object names of both kinds are DNS-1123 labels.
pub fn validate_network_name(name: &str, prefix: bool) -> Vec<String> {
    name_is_dns_label(name, prefix)
}

/// Validates a provider identifier such as `example.com/macvlan`.
///
/// The empty string is accepted; whether a provider is required is up to the
/// caller.
pub fn validate_provider(provider: &str, path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();
    if provider.is_empty() {
        return errs;
    }
    if provider.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errs.push(FieldError::too_long(
            path,
            provider,
            DNS1123_SUBDOMAIN_MAX_LENGTH,
        ));
    }
    for msg in is_qualified_name(provider) {
        errs.push(FieldError::invalid(path, provider, msg));
    }
    errs
}

/// Validates each parameters reference and flags repeated ones.
pub fn validate_parameters_refs(refs: &[ParametersRef], path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();
    let mut seen = HashSet::new();

    for (i, r) in refs.iter().enumerate() {
        let item = path.index(i);

        if r.kind.is_empty() {
            errs.push(FieldError::required(&item.child("kind"), ""));
        }

        if r.name.is_empty() {
            errs.push(FieldError::required(&item.child("name"), ""));
        } else {
            for msg in is_dns1123_subdomain(&r.name) {
                errs.push(FieldError::invalid(&item.child("name"), &r.name, msg));
            }
        }

        if !r.group.is_empty() {
            for msg in is_dns1123_subdomain(&r.group) {
                errs.push(FieldError::invalid(&item.child("group"), &r.group, msg));
            }
        }

        if !r.namespace.is_empty() {
            for msg in is_dns1123_label(&r.namespace) {
                errs.push(FieldError::invalid(
                    &item.child("namespace"),
                    &r.namespace,
                    msg,
                ));
            }
        }

        if !seen.insert(r) {
            errs.push(FieldError::duplicate(
                &item,
                format!("{}/{}/{}/{}", r.group, r.kind, r.namespace, r.name),
            ));
        }
    }
    errs
}

/// Validates status conditions. Condition types must be unique.
pub fn validate_conditions(conditions: &[Condition], path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();
    let mut types = HashSet::new();

    for (i, c) in conditions.iter().enumerate() {
        let item = path.index(i);

        let type_path = item.child("type");
        if c.type_.is_empty() {
            errs.push(FieldError::required(&type_path, ""));
        } else {
            for msg in is_qualified_name(&c.type_) {
                errs.push(FieldError::invalid(&type_path, &c.type_, msg));
            }
            if !types.insert(c.type_.as_str()) {
                errs.push(FieldError::duplicate(&type_path, &c.type_));
            }
        }

        if !CONDITION_STATUSES.contains(&c.status.as_str()) {
            errs.push(FieldError::not_supported(
                &item.child("status"),
                &c.status,
                CONDITION_STATUSES,
            ));
        }

        if c.observed_generation < 0 {
            errs.push(FieldError::invalid(
                &item.child("observedGeneration"),
                c.observed_generation,
                "must be greater than or equal to zero",
            ));
        }

        let reason_path = item.child("reason");
        if c.reason.is_empty() {
            errs.push(FieldError::required(&reason_path, ""));
        } else if c.reason.len() > CONDITION_REASON_MAX_LENGTH {
            errs.push(FieldError::too_long(
                &reason_path,
                "",
                CONDITION_REASON_MAX_LENGTH,
            ));
        } else {
            for msg in is_condition_reason(&c.reason) {
                errs.push(FieldError::invalid(&reason_path, &c.reason, msg));
            }
        }

        if c.message.len() > CONDITION_MESSAGE_MAX_LENGTH {
            errs.push(FieldError::too_long(
                &item.child("message"),
                "",
                CONDITION_MESSAGE_MAX_LENGTH,
            ));
        }
    }
    errs
}
