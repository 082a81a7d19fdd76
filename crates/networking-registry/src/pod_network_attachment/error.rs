//! Error types for the PodNetworkAttachment store.

use registry_framework::{ErrorList, StoreError};
use thiserror::Error;

/// Errors that can occur during PodNetworkAttachment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PodNetworkAttachmentError {
    #[error("PodNetworkAttachment is invalid: {0}")]
    Invalid(ErrorList),

    #[error("PodNetworkAttachment not found: {0}")]
    NotFound(String),

    #[error("PodNetworkAttachment already exists: {0}")]
    AlreadyExists(String),

    #[error("PodNetworkAttachment request forbidden: {0}")]
    Forbidden(String),

    #[error("PodNetworkAttachment conflict: {0}")]
    Conflict(String),

    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl PodNetworkAttachmentError {
    pub fn field_errors(&self) -> Option<&ErrorList> {
        match self {
            PodNetworkAttachmentError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<StoreError> for PodNetworkAttachmentError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Invalid { errors, .. } => PodNetworkAttachmentError::Invalid(errors),
            StoreError::NotFound { name, .. } => PodNetworkAttachmentError::NotFound(name),
            StoreError::AlreadyExists { name, .. } => {
                PodNetworkAttachmentError::AlreadyExists(name)
            }
            StoreError::Forbidden { reason, .. } => PodNetworkAttachmentError::Forbidden(reason),
            StoreError::Conflict { reason, .. } => PodNetworkAttachmentError::Conflict(reason),
            other => PodNetworkAttachmentError::StoreCommunication(other.to_string()),
        }
    }
}
