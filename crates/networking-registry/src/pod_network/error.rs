//! Error types for the PodNetwork store.

use registry_framework::{ErrorList, StoreError};
use thiserror::Error;

/// Errors that can occur during PodNetwork operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PodNetworkError {
    /// The object failed validation. Carries every field error found.
    #[error("PodNetwork is invalid: {0}")]
    Invalid(ErrorList),

    #[error("PodNetwork not found: {0}")]
    NotFound(String),

    #[error("PodNetwork already exists: {0}")]
    AlreadyExists(String),

    /// The request is never allowed, e.g. updating a network that does not exist.
    #[error("PodNetwork request forbidden: {0}")]
    Forbidden(String),

    /// The update was based on a stale `resourceVersion`.
    #[error("PodNetwork conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl PodNetworkError {
    /// The field errors of an `Invalid` error, if any.
    pub fn field_errors(&self) -> Option<&ErrorList> {
        match self {
            PodNetworkError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<StoreError> for PodNetworkError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Invalid { errors, .. } => PodNetworkError::Invalid(errors),
            StoreError::NotFound { name, .. } => PodNetworkError::NotFound(name),
            StoreError::AlreadyExists { name, .. } => PodNetworkError::AlreadyExists(name),
            StoreError::Forbidden { reason, .. } => PodNetworkError::Forbidden(reason),
            StoreError::Conflict { reason, .. } => PodNetworkError::Conflict(reason),
            other => PodNetworkError::StoreCommunication(other.to_string()),
        }
    }
}
