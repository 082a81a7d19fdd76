//! # Store Errors
//!
//! Request-level failures returned by the store and its client. Field-level
//! problems travel inside [`StoreError::Invalid`] as a complete [`ErrorList`].

use crate::field::ErrorList;

/// Errors that can occur while a request passes through the store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("no kind is registered for the type {0}")]
    NotRegistered(String),
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: String, name: String },
    #[error("{kind} \"{name}\" already exists")]
    AlreadyExists { kind: String, name: String },
    #[error("{kind} \"{name}\" is forbidden: {reason}")]
    Forbidden {
        kind: String,
        name: String,
        reason: String,
    },
    #[error("{kind} \"{name}\" is invalid: {errors}")]
    Invalid {
        kind: String,
        name: String,
        errors: ErrorList,
    },
    #[error("Operation cannot be fulfilled on {kind} \"{name}\": {reason}")]
    Conflict {
        kind: String,
        name: String,
        reason: String,
    },
}

impl StoreError {
    /// The field errors carried by an `Invalid` error, if any.
    pub fn field_errors(&self) -> Option<&ErrorList> {
        match self {
            StoreError::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldError, FieldPath};

    #[test]
    fn test_invalid_display_lists_errors() {
        let mut errors = ErrorList::new();
        errors.push(FieldError::required(
            &FieldPath::new("spec").child("podNetworkName"),
            "",
        ));
        let err = StoreError::Invalid {
            kind: "PodNetworkAttachment".into(),
            name: "pna".into(),
            errors: errors.clone(),
        };

        assert_eq!(
            err.to_string(),
            "PodNetworkAttachment \"pna\" is invalid: spec.podNetworkName: Required value"
        );
        assert_eq!(err.field_errors(), Some(&errors));
        assert!(StoreError::StoreClosed.field_errors().is_none());
    }
}
