//! # Generic Validation Helpers
//!
//! Checks that apply to any kind: DNS-style name formats, qualified names,
//! and the standard `metadata` block on create and update. Kind validators
//! call these and append the results to their own lists.

use crate::field::{ErrorList, FieldError, FieldPath};
use crate::object::ObjectMeta;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Display;

pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;
pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;
pub const CONDITION_REASON_MAX_LENGTH: usize = 1024;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";

static DNS1123_LABEL_RE: Lazy<Regex> = Lazy::new(|| anchored(DNS1123_LABEL_FMT));
static DNS1123_SUBDOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        "{label}(\\.{label})*",
        label = DNS1123_LABEL_FMT
    ))
});
static QUALIFIED_NAME_RE: Lazy<Regex> = Lazy::new(|| anchored(QUALIFIED_NAME_FMT));
static LABEL_VALUE_RE: Lazy<Regex> = Lazy::new(|| anchored(&format!("({})?", QUALIFIED_NAME_FMT)));
static CONDITION_REASON_RE: Lazy<Regex> =
    Lazy::new(|| anchored("[A-Za-z]([A-Za-z0-9_,:]*[A-Za-z0-9_])?"));

fn anchored(fmt: &str) -> Regex {
    // Patterns are compile-time constants.
    Regex::new(&format!("^(?:{})$", fmt)).expect("static validation pattern")
}

/// Validates a name. `prefix` is true when checking a `generateName` base,
/// which may end in characters a full name may not.
pub type ValidateNameFn = fn(name: &str, prefix: bool) -> Vec<String>;

/// Errors describing why `value` is not a DNS-1123 label (empty when valid).
pub fn is_dns1123_label(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        errs.push(max_len_msg(DNS1123_LABEL_MAX_LENGTH));
    }
    if !DNS1123_LABEL_RE.is_match(value) {
        errs.push(
            "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    errs
}

/// Errors describing why `value` is not a DNS-1123 subdomain (empty when valid).
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errs.push(max_len_msg(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    if !DNS1123_SUBDOMAIN_RE.is_match(value) {
        errs.push(
            "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, \
             '-' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    errs
}

/// Errors describing why `value` is not a qualified name such as
/// `example.com/my-name` or `my-name` (empty when valid).
pub fn is_qualified_name(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    let (prefix, name) = match value.split_once('/') {
        None => (None, value),
        Some((prefix, name)) if !name.contains('/') => (Some(prefix), name),
        Some(_) => {
            errs.push(
                "a qualified name must consist of an optional DNS subdomain prefix and '/' \
                 followed by a name"
                    .to_string(),
            );
            return errs;
        }
    };

    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            errs.push("prefix part must be non-empty".to_string());
        } else {
            errs.extend(
                is_dns1123_subdomain(prefix)
                    .into_iter()
                    .map(|msg| format!("prefix part {}", msg)),
            );
        }
    }

    if name.is_empty() {
        errs.push("name part must be non-empty".to_string());
    } else {
        if name.len() > QUALIFIED_NAME_MAX_LENGTH {
            errs.push(format!("name part {}", max_len_msg(QUALIFIED_NAME_MAX_LENGTH)));
        }
        if !QUALIFIED_NAME_RE.is_match(name) {
            errs.push(
                "name part must consist of alphanumeric characters, '-', '_' or '.', \
                 and must start and end with an alphanumeric character"
                    .to_string(),
            );
        }
    }
    errs
}

/// Errors describing why `value` is not a valid label value (empty when valid).
pub fn is_valid_label_value(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        errs.push(max_len_msg(LABEL_VALUE_MAX_LENGTH));
    }
    if !LABEL_VALUE_RE.is_match(value) {
        errs.push(
            "a valid label must be an empty string or consist of alphanumeric characters, \
             '-', '_' or '.', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    errs
}

/// Errors describing why `value` is not a CamelCase condition reason such
/// as `ProviderReady` (empty when valid).
pub fn is_condition_reason(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > CONDITION_REASON_MAX_LENGTH {
        errs.push(max_len_msg(CONDITION_REASON_MAX_LENGTH));
    }
    if !CONDITION_REASON_RE.is_match(value) {
        errs.push(
            "a condition reason must start with alphabetic character, optionally followed by \
             a string of alphanumeric characters or '_,:', and must end with an alphanumeric \
             character or '_'"
                .to_string(),
        );
    }
    errs
}

fn max_len_msg(max: usize) -> String {
    format!("must be no more than {} characters", max)
}

/// Name validator for kinds whose names are DNS-1123 labels.
pub fn name_is_dns_label(name: &str, prefix: bool) -> Vec<String> {
    is_dns1123_label(&mask_trailing_dash(name, prefix))
}

/// Name validator for kinds whose names are DNS-1123 subdomains.
pub fn name_is_dns_subdomain(name: &str, prefix: bool) -> Vec<String> {
    is_dns1123_subdomain(&mask_trailing_dash(name, prefix))
}

// A generateName base like "net-" is fine: the random suffix closes it.
fn mask_trailing_dash(name: &str, prefix: bool) -> String {
    match name.strip_suffix('-') {
        Some(stripped) if prefix && !stripped.is_empty() => format!("{}a", stripped),
        _ => name.to_string(),
    }
}

/// Turns a list of format messages into `Invalid` errors at `path`.
fn invalid_all(path: &FieldPath, value: &str, msgs: Vec<String>) -> ErrorList {
    msgs.into_iter()
        .map(|msg| FieldError::invalid(path, value, msg))
        .collect()
}

/// Validates label keys and values.
pub fn validate_labels(labels: &BTreeMap<String, String>, path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();
    for (key, value) in labels {
        errs.append(invalid_all(path, key, is_qualified_name(key)));
        errs.append(invalid_all(path, value, is_valid_label_value(value)));
    }
    errs
}

/// Validates annotation keys and the total annotation size.
pub fn validate_annotations(annotations: &BTreeMap<String, String>, path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();
    let mut total_size = 0usize;
    for (key, value) in annotations {
        let lowered = key.to_lowercase();
        errs.append(invalid_all(path, key, is_qualified_name(&lowered)));
        total_size = total_size.saturating_add(key.len()).saturating_add(value.len());
    }
    if total_size > TOTAL_ANNOTATION_SIZE_LIMIT {
        errs.push(FieldError::too_long(path, "", TOTAL_ANNOTATION_SIZE_LIMIT));
    }
    errs
}

/// Validates the `metadata` block of a new object.
///
/// Names are checked with `validate_name`. Namespaces must be present for
/// namespaced kinds and absent for cluster-scoped ones.
pub fn validate_object_meta(
    meta: &ObjectMeta,
    namespace_scoped: bool,
    validate_name: ValidateNameFn,
    path: &FieldPath,
) -> ErrorList {
    let mut errs = ErrorList::new();

    let generate_name = meta.generate_name.as_deref().unwrap_or_default();
    if !generate_name.is_empty() {
        for msg in validate_name(generate_name, true) {
            errs.push(FieldError::invalid(
                &path.child("generateName"),
                generate_name,
                msg,
            ));
        }
    }

    let name = meta.name.as_deref().unwrap_or_default();
    if name.is_empty() {
        errs.push(FieldError::required(
            &path.child("name"),
            "name or generateName is required",
        ));
    } else {
        for msg in validate_name(name, false) {
            errs.push(FieldError::invalid(&path.child("name"), name, msg));
        }
    }

    let namespace = meta.namespace.as_deref().unwrap_or_default();
    if namespace_scoped {
        if namespace.is_empty() {
            errs.push(FieldError::required(&path.child("namespace"), ""));
        } else {
            errs.append(invalid_all(
                &path.child("namespace"),
                namespace,
                is_dns1123_label(namespace),
            ));
        }
    } else if !namespace.is_empty() {
        errs.push(FieldError::forbidden(
            &path.child("namespace"),
            "not allowed on this type",
        ));
    }

    if let Some(generation) = meta.generation.filter(|g| *g < 0) {
        errs.push(FieldError::invalid(
            &path.child("generation"),
            generation,
            "must be greater than or equal to 0",
        ));
    }

    if let Some(labels) = &meta.labels {
        errs.append(validate_labels(labels, &path.child("labels")));
    }
    if let Some(annotations) = &meta.annotations {
        errs.append(validate_annotations(annotations, &path.child("annotations")));
    }
    errs
}

/// Validates the `metadata` block of an update against the stored one.
pub fn validate_object_meta_update(new: &ObjectMeta, old: &ObjectMeta, path: &FieldPath) -> ErrorList {
    let mut errs = ErrorList::new();

    for (field, new_value, old_value) in [
        ("name", &new.name, &old.name),
        ("namespace", &new.namespace, &old.namespace),
        ("uid", &new.uid, &old.uid),
    ] {
        errs.append(validate_immutable_field(
            new_value.as_deref().unwrap_or_default(),
            old_value.as_deref().unwrap_or_default(),
            &path.child(field),
        ));
    }
    if new.creation_timestamp != old.creation_timestamp {
        let shown = new
            .creation_timestamp
            .as_ref()
            .map(|ts| ts.0.to_string())
            .unwrap_or_default();
        errs.push(FieldError::immutable(&path.child("creationTimestamp"), shown));
    }
    let (new_generation, old_generation) = (
        new.generation.unwrap_or_default(),
        old.generation.unwrap_or_default(),
    );
    if new_generation < old_generation {
        errs.push(FieldError::invalid(
            &path.child("generation"),
            new_generation,
            "must not be decremented",
        ));
    }

    if let Some(labels) = &new.labels {
        errs.append(validate_labels(labels, &path.child("labels")));
    }
    if let Some(annotations) = &new.annotations {
        errs.append(validate_annotations(annotations, &path.child("annotations")));
    }
    errs
}

/// A single `Immutable` error at `path` when the value changed.
pub fn validate_immutable_field<T>(new: &T, old: &T, path: &FieldPath) -> ErrorList
where
    T: PartialEq + Display + ?Sized,
{
    let mut errs = ErrorList::new();
    if new != old {
        errs.push(FieldError::immutable(path, new));
    }
    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ErrorType;
    use crate::object::{named, Time};
    use jiff::Timestamp;

    fn meta_path() -> FieldPath {
        FieldPath::new("metadata")
    }

    #[test]
    fn test_dns1123_label() {
        assert!(is_dns1123_label("pod-net-1").is_empty());
        assert!(is_dns1123_label("a").is_empty());
        assert!(!is_dns1123_label("").is_empty());
        assert!(!is_dns1123_label("-leading").is_empty());
        assert!(!is_dns1123_label("Upper").is_empty());
        assert!(!is_dns1123_label("has.dot").is_empty());
        assert_eq!(is_dns1123_label(&"a".repeat(64)).len(), 1);
    }

    #[test]
    fn test_dns1123_subdomain() {
        assert!(is_dns1123_subdomain("example.com").is_empty());
        assert!(is_dns1123_subdomain("a.b-c.d").is_empty());
        assert!(!is_dns1123_subdomain("a..b").is_empty());
        assert!(!is_dns1123_subdomain("trailing.").is_empty());
        assert!(!is_dns1123_subdomain(&"a".repeat(254)).is_empty());
    }

    #[test]
    fn test_qualified_name() {
        assert!(is_qualified_name("macvlan").is_empty());
        assert!(is_qualified_name("example.com/Mac_Vlan.v2").is_empty());
        assert!(!is_qualified_name("/name").is_empty());
        assert!(!is_qualified_name("example.com/").is_empty());
        assert!(!is_qualified_name("a/b/c").is_empty());
        assert!(!is_qualified_name("Bad_Prefix/name").is_empty());
        assert!(!is_qualified_name("-name").is_empty());
    }

    #[test]
    fn test_label_value() {
        assert!(is_valid_label_value("").is_empty());
        assert!(is_valid_label_value("v1.2_beta").is_empty());
        assert!(!is_valid_label_value("bad value").is_empty());
    }

    #[test]
    fn test_condition_reason() {
        assert!(is_condition_reason("ProviderReady").is_empty());
        assert!(is_condition_reason("Waiting_For:Provider").is_empty());
        assert!(!is_condition_reason("").is_empty());
        assert!(!is_condition_reason("1Bad").is_empty());
        assert!(!is_condition_reason("Ends,").is_empty());
        assert!(!is_condition_reason(&"A".repeat(1025)).is_empty());
    }

    #[test]
    fn test_generate_name_prefix_may_end_in_dash() {
        assert!(name_is_dns_label("net-", true).is_empty());
        assert!(!name_is_dns_label("net-", false).is_empty());
        assert!(!name_is_dns_label("-", true).is_empty());
    }

    #[test]
    fn test_object_meta_requires_name() {
        let errs = validate_object_meta(
            &ObjectMeta::default(),
            false,
            name_is_dns_label,
            &meta_path(),
        );
        assert_eq!(errs.len(), 1);
        let err = errs.iter().next().unwrap();
        assert_eq!(err.field, "metadata.name");
        assert_eq!(err.error_type, ErrorType::Required);
    }

    #[test]
    fn test_object_meta_namespace_rules() {
        let meta = ObjectMeta {
            namespace: Some("default".into()),
            ..named("net")
        };

        let cluster = validate_object_meta(&meta, false, name_is_dns_label, &meta_path());
        assert_eq!(cluster.filter_type(ErrorType::Forbidden).len(), 1);
        assert!(cluster.has_field("metadata.namespace"));

        let scoped = validate_object_meta(&meta, true, name_is_dns_label, &meta_path());
        assert!(scoped.is_empty());

        let missing = validate_object_meta(
            &named("net"),
            true,
            name_is_dns_label,
            &meta_path(),
        );
        assert!(missing.has_field("metadata.namespace"));
    }

    #[test]
    fn test_object_meta_collects_every_problem() {
        let meta = ObjectMeta {
            generation: Some(-1),
            labels: Some(BTreeMap::from([("bad key!".to_string(), "ok".to_string())])),
            ..named("Bad_Name")
        };

        let errs = validate_object_meta(&meta, false, name_is_dns_label, &meta_path());
        assert!(errs.has_field("metadata.name"));
        assert!(errs.has_field("metadata.generation"));
        assert!(errs.has_field("metadata.labels"));
    }

    #[test]
    fn test_object_meta_update_immutables() {
        let old = ObjectMeta {
            uid: Some("uid-1".into()),
            creation_timestamp: Some(Time(Timestamp::now())),
            generation: Some(2),
            ..named("net")
        };

        let same = old.clone();
        assert!(validate_object_meta_update(&same, &old, &meta_path()).is_empty());

        let mut changed = old.clone();
        changed.uid = Some("uid-2".into());
        changed.creation_timestamp = None;
        changed.generation = Some(1);
        let errs = validate_object_meta_update(&changed, &old, &meta_path());
        assert!(errs.has_field("metadata.uid"));
        assert!(errs.has_field("metadata.creationTimestamp"));
        assert!(errs.has_field("metadata.generation"));
        assert_eq!(errs.filter_type(ErrorType::Immutable).len(), 2);
    }

    #[test]
    fn test_immutable_field() {
        let path = FieldPath::new("spec").child("provider");
        assert!(validate_immutable_field("a", "a", &path).is_empty());

        let errs = validate_immutable_field("b", "a", &path);
        assert_eq!(errs.len(), 1);
        let err = errs.iter().next().unwrap();
        assert_eq!(err.error_type, ErrorType::Immutable);
        assert_eq!(err.bad_value.as_deref(), Some("b"));
    }
}
