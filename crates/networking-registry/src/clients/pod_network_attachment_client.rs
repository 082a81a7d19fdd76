//! # PodNetworkAttachment Client
//!
//! Wraps a `StoreClient<PodNetworkAttachmentStrategy>`. Before creating an
//! attachment it can optionally confirm that the target network exists.
use crate::clients::PodNetworkClient;
use crate::model::PodNetworkAttachment;
use crate::pod_network_attachment::{PodNetworkAttachmentError, PodNetworkAttachmentStrategy};
use async_trait::async_trait;
use registry_framework::{
    FieldError, FieldPath, Persisted, Resource, ResourceClient, StoreClient, StoreError,
};
use tracing::{debug, instrument, warn};

/// Client for interacting with the PodNetworkAttachment store.
#[derive(Clone)]
pub struct PodNetworkAttachmentClient {
    inner: StoreClient<PodNetworkAttachmentStrategy>,
}

impl PodNetworkAttachmentClient {
    pub fn new(inner: StoreClient<PodNetworkAttachmentStrategy>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceClient<PodNetworkAttachmentStrategy> for PodNetworkAttachmentClient {
    type Error = PodNetworkAttachmentError;

    fn inner(&self) -> &StoreClient<PodNetworkAttachmentStrategy> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        PodNetworkAttachmentError::from(e)
    }
}

impl PodNetworkAttachmentClient {
    #[instrument(skip(self, attachment), fields(name = attachment.name()))]
    pub async fn create_pod_network_attachment(
        &self,
        attachment: PodNetworkAttachment,
    ) -> Result<Persisted<PodNetworkAttachment>, PodNetworkAttachmentError> {
        debug!(?attachment, "Sending request");
        self.inner.create(attachment).await.map_err(Self::map_error)
    }

    /// Creates an attachment only if `spec.podNetworkName` names a stored
    /// network.
    ///
    /// The check and the create are two separate requests to two stores, so
    /// the network may still be deleted in between.
    #[instrument(skip(self, networks, attachment), fields(name = attachment.name()))]
    pub async fn create_pod_network_attachment_checked(
        &self,
        networks: &PodNetworkClient,
        attachment: PodNetworkAttachment,
    ) -> Result<Persisted<PodNetworkAttachment>, PodNetworkAttachmentError> {
        let target = attachment.spec.pod_network_name.clone();
        if !target.is_empty() {
            let found = networks
                .get(target.clone())
                .await
                .map_err(|e| PodNetworkAttachmentError::StoreCommunication(e.to_string()))?;
            if found.is_none() {
                warn!(pod_network = %target, "Target PodNetwork not found");
                let path = FieldPath::new("spec").child("podNetworkName");
                return Err(PodNetworkAttachmentError::Invalid(
                    vec![FieldError::not_found(&path, &target)].into(),
                ));
            }
        }
        self.create_pod_network_attachment(attachment).await
    }

    /// Replaces a stored attachment. `spec.podNetworkName` cannot change.
    #[instrument(skip(self, attachment), fields(name = attachment.name()))]
    pub async fn update_pod_network_attachment(
        &self,
        attachment: PodNetworkAttachment,
    ) -> Result<Persisted<PodNetworkAttachment>, PodNetworkAttachmentError> {
        debug!(?attachment, "Sending request");
        self.inner.update(attachment).await.map_err(Self::map_error)
    }
}
